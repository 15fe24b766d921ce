//! Random push/pull sequences checked against `VecDeque`.

use std::{collections::VecDeque, format, string::String};

use super::fifo;

struct XorShift(u64);

impl XorShift {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

#[test]
fn occupancy_tracks_successful_operations() {
    for capacity in 0..6 {
        let mut f = fifo(capacity);
        let mut model: VecDeque<String> = VecDeque::new();
        let mut rng = XorShift(0x9E37_79B9_7F4A_7C15 ^ capacity as u64);
        let (mut pushed, mut pulled) = (0usize, 0usize);

        for step in 0..2_000 {
            if rng.next_u64() % 3 != 0 {
                let value = format!("s{step}");
                let free = f.push(&value).unwrap();
                assert_eq!(free, capacity - model.len());
                if free > 0 {
                    model.push_back(value);
                    pushed += 1;
                }
            } else {
                let got = f.pull();
                assert_eq!(got, model.pop_front());
                if got.is_some() {
                    pulled += 1;
                }
            }

            assert_eq!(f.len(), pushed - pulled);
            assert_eq!(f.len(), model.len());
            assert!(f.len() <= capacity);
            assert_eq!(f.is_empty(), model.is_empty());
            assert_eq!(f.is_full(), model.len() == capacity);
            assert_eq!(f.peek(), model.front().map(String::as_str));
            assert_eq!(f.peek_back(), model.back().map(String::as_str));
        }

        assert!(f.iter().eq(model.iter().map(String::as_str)));
    }
}
