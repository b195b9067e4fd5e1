use crate::state::ViewState;

/// Milliseconds until the next price refresh.
/// None without a deadline; holds at 0 once the deadline has passed.
pub fn remaining_ms(state: &ViewState, now_ms: i64) -> Option<i64> {
    state
        .next_update_ms
        .map(|deadline| (deadline - now_ms).max(0))
}

/// Absolute deadline for an offset the host sends in milliseconds.
pub fn deadline_from_offset(now_ms: i64, offset_ms: i64) -> i64 {
    now_ms.saturating_add(offset_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_deadline() {
        let state = ViewState::new();
        assert_eq!(remaining_ms(&state, 1_000), None);
    }

    #[test]
    fn test_counts_down() {
        let mut state = ViewState::new();
        state.next_update_ms = Some(deadline_from_offset(1_000, 60_000));

        assert_eq!(remaining_ms(&state, 1_000), Some(60_000));
        assert_eq!(remaining_ms(&state, 31_000), Some(30_000));
    }

    #[test]
    fn test_holds_at_zero() {
        let mut state = ViewState::new();
        state.next_update_ms = Some(10_000);

        assert_eq!(remaining_ms(&state, 10_000), Some(0));
        assert_eq!(remaining_ms(&state, 99_000), Some(0));
        // Deadline is not cleared
        assert_eq!(state.next_update_ms, Some(10_000));
    }
}
