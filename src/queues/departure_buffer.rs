use std::collections::VecDeque;

/// How expired departures are cleared from the buffer at each arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Every pending departure at or before the arrival instant is removed.
    Exhaustive,
    /// Legacy walk: the cursor advances after a removal, so the entry that
    /// slides into the vacated slot is not examined on this pass.
    SkipAfterRemoval,
}

impl Default for ExpiryPolicy {
    fn default () -> Self {
        ExpiryPolicy::Exhaustive
    }
}

/// Pending departure times of the packets admitted into a buffer of size K.
#[derive(Debug)]
pub struct DepartureBuffer {
    capacity: usize,
    policy: ExpiryPolicy,
    pending: VecDeque<f64>,
}

impl DepartureBuffer {
    pub fn new (capacity: usize, policy: ExpiryPolicy) -> Self {
        DepartureBuffer {
            capacity,
            policy,
            pending: VecDeque::with_capacity(capacity),
        }
    }

    /// Removes departures at or before `now`, returns how many were removed.
    pub fn expire (&mut self, now: f64) -> usize {
        let before = self.pending.len();
        match self.policy {
            ExpiryPolicy::Exhaustive => self.pending.retain(|&d| d > now),
            ExpiryPolicy::SkipAfterRemoval => {
                let mut x = 0;
                while x < self.pending.len() {
                    if self.pending[x] <= now {
                        self.pending.remove(x);
                    }
                    x += 1;
                }
            }
        }
        before - self.pending.len()
    }

    /// Records `departure` if there is room, returns whether the packet was admitted.
    pub fn try_admit (&mut self, departure: f64) -> bool {
        if self.pending.len() < self.capacity {
            self.pending.push_back(departure);
            true
        }
        else {
            false
        }
    }

    pub fn len (&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty (&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_full (&self) -> bool {
        self.pending.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_capacity() {
        let mut buf = DepartureBuffer::new(2, ExpiryPolicy::Exhaustive);
        assert!(buf.try_admit(1.));
        assert!(buf.try_admit(2.));
        assert!(buf.is_full());
        assert!(!buf.try_admit(3.));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn exhaustive_expiry_clears_every_past_departure() {
        let mut buf = DepartureBuffer::new(4, ExpiryPolicy::Exhaustive);
        for d in &[1., 2., 3., 5.] {
            buf.try_admit(*d);
        }
        assert_eq!(buf.expire(3.), 3);
        assert_eq!(buf.len(), 1);
        assert!(buf.try_admit(6.));
    }

    #[test]
    fn departure_exactly_at_arrival_is_expired() {
        let mut buf = DepartureBuffer::new(1, ExpiryPolicy::Exhaustive);
        buf.try_admit(2.);
        assert_eq!(buf.expire(2.), 1);
        assert!(buf.is_empty());
    }

    #[test]
    fn skip_after_removal_leaves_every_other_expired_entry() {
        let mut buf = DepartureBuffer::new(4, ExpiryPolicy::SkipAfterRemoval);
        for d in &[1., 2., 3., 5.] {
            buf.try_admit(*d);
        }
        // 1 is removed, 2 slides to slot 0 and is skipped, 3 is removed
        assert_eq!(buf.expire(3.), 2);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.expire(3.), 1);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn policies_admit_alike_but_hold_different_lengths() {
        let mut exhaustive = DepartureBuffer::new(3, ExpiryPolicy::Exhaustive);
        let mut legacy = DepartureBuffer::new(3, ExpiryPolicy::SkipAfterRemoval);
        // (arrival, departure) pairs; departures increase as in a FIFO server
        let arrivals = [(0.1, 1.), (0.2, 1.5), (0.3, 2.), (0.4, 2.5),
                        (2.2, 3.), (2.3, 3.5), (2.4, 4.), (5., 6.)];
        let mut lengths_differ = false;
        for &(t, d) in arrivals.iter() {
            exhaustive.expire(t);
            legacy.expire(t);
            lengths_differ |= exhaustive.len() != legacy.len();
            assert!(legacy.len() >= exhaustive.len());
            assert_eq!(exhaustive.try_admit(d), legacy.try_admit(d), "arrival at {}", t);
        }
        assert!(lengths_differ);
    }
}
