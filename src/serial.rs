//! Bounded byte FIFO for serial-port adapters.

use heapless::Deque;

/// Byte queue backing `serial_read_byte`/`serial_write_byte` style
/// implementations. Capacity is fixed at compile time; pushing into a full
/// queue drops the new byte and reports the overflow to the caller.
#[derive(Debug, Default)]
pub struct SerialQueue<const N: usize> {
    queue: Deque<u8, N>,
}

impl<const N: usize> SerialQueue<N> {
    pub const fn new() -> Self {
        SerialQueue {
            queue: Deque::new(),
        }
    }

    /// Queue one byte. Returns `false` if the queue was full and the byte
    /// was dropped.
    pub fn push(&mut self, byte: u8) -> bool {
        self.queue.push_back(byte).is_ok()
    }

    /// Pop the oldest byte, if any.
    pub fn pop(&mut self) -> Option<u8> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue: SerialQueue<4> = SerialQueue::new();
        assert!(queue.push(1));
        assert!(queue.push(2));
        assert!(queue.push(3));

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn overflow_drops_newest() {
        let mut queue: SerialQueue<2> = SerialQueue::new();
        assert!(queue.push(1));
        assert!(queue.push(2));
        assert!(!queue.push(3));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(1));
    }
}
