#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Number of live elements given both cursors and the last-operation flag.
///
/// Cursor equality alone cannot separate an empty buffer from a full one
/// when every slot is usable; the flag breaks the tie.
#[inline]
pub fn count(tail: usize, head: usize, capacity: usize, last_read: bool) -> usize {
    debug_assert!(head < capacity || capacity == 0);
    debug_assert!(tail < capacity || capacity == 0);
    if head == tail {
        if last_read {
            0
        } else {
            capacity
        }
    } else if head > tail {
        head - tail
    } else {
        capacity + head - tail
    }
}
