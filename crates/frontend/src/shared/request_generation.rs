/// Counter that tells the latest of several overlapping requests apart.
///
/// Call `begin` when a request starts and keep the returned number; once the
/// response arrives, apply it only if `is_current` still holds.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_request_is_current() {
        let mut generation = RequestGeneration::default();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_slow_response_from_previous_session_is_dropped() {
        let mut generation = RequestGeneration::default();
        let mut count = None;

        let session_a = generation.begin();
        let _logout = generation.begin();
        let session_b = generation.begin();

        for (started, response) in [(session_b, 2u32), (session_a, 7u32)] {
            if generation.is_current(started) {
                count = Some(response);
            }
        }
        assert_eq!(count, Some(2));
    }
}
