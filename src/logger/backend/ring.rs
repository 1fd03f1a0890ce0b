//! Lock-free ring of buffered log entries.
//!
//! Multi-producer, single-consumer. Writers claim a slot by ticket
//! (`fetch_add` on the write sequence), copy their entry in, then publish it
//! by storing the ticket into the slot's sequence cell with `Release`
//! ordering. The reader only consumes a slot whose sequence matches its own
//! counter, loaded with `Acquire`. A full ring overwrites the oldest
//! unread entries and counts them as dropped.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicUsize, Ordering};

use super::entry::BufferedEntry;
use crate::logger::config::KERNEL_LOG_BUFFER_SIZE;

/// One ring slot: publication sequence plus entry storage.
struct Slot {
    seq: AtomicUsize,
    entry: UnsafeCell<BufferedEntry>,
}

impl Slot {
    fn empty() -> Self {
        Self {
            seq: AtomicUsize::new(0),
            entry: UnsafeCell::new(BufferedEntry::empty()),
        }
    }
}

/// Entries the byte budget allows.
pub(super) const MAX_LOG_ENTRIES: usize = KERNEL_LOG_BUFFER_SIZE / core::mem::size_of::<Slot>();

/// The ring itself. Entry storage is interior-mutable; the sequence
/// protocol above is what makes concurrent access sound.
pub(super) struct EntryRing {
    /// Monotonic ticket counter for writers.
    write_seq: AtomicUsize,
    /// Next sequence the consumer will read.
    read_seq: AtomicUsize,
    /// Entries overwritten before being read.
    dropped: AtomicUsize,
    slots: Box<[Slot]>,
}

// Slot entries are only touched under the seq handshake.
unsafe impl Sync for EntryRing {}

impl EntryRing {
    /// Creates a ring sized by [`KERNEL_LOG_BUFFER_SIZE`].
    pub(super) fn new() -> Self {
        let slots: Vec<Slot> = (0..MAX_LOG_ENTRIES).map(|_| Slot::empty()).collect();
        Self {
            write_seq: AtomicUsize::new(1),
            read_seq: AtomicUsize::new(1),
            dropped: AtomicUsize::new(0),
            slots: slots.into_boxed_slice(),
        }
    }

    /// Writes an entry, overwriting the oldest unread one when full.
    pub(super) fn write(&self, entry: BufferedEntry) {
        let seq = self.write_seq.fetch_add(1, Ordering::Relaxed);
        let slot = &self.slots[seq % self.slots.len()];

        self.handle_overwrite(seq);

        // The ticket makes this writer the slot's owner until it publishes.
        unsafe {
            *slot.entry.get() = entry;
        }
        slot.seq.store(seq, Ordering::Release);
    }

    /// Advances the read pointer past entries the write at `current_seq`
    /// is about to overwrite, accounting for them in `dropped`.
    ///
    /// Drops are added only after a successful advance, so concurrent
    /// writers racing over the same stretch count each entry once.
    fn handle_overwrite(&self, current_seq: usize) {
        let capacity = self.slots.len();
        let new_read_seq = (current_seq + 1).saturating_sub(capacity);

        let mut read_seq = self.read_seq.load(Ordering::Acquire);
        while read_seq < new_read_seq {
            match self.read_seq.compare_exchange(
                read_seq,
                new_read_seq,
                Ordering::Release,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    self.dropped
                        .fetch_add(new_read_seq - read_seq, Ordering::Relaxed);
                    break;
                }
                Err(seen_seq) => read_seq = seen_seq,
            }
        }
    }

    /// Reads the next unread entry, if one has been published.
    pub(super) fn read(&self) -> Option<BufferedEntry> {
        loop {
            let read_seq = self.read_seq.load(Ordering::Acquire);
            let slot = &self.slots[read_seq % self.slots.len()];

            if slot.seq.load(Ordering::Acquire) != read_seq {
                return None;
            }

            let entry = unsafe { (*slot.entry.get()).clone() };
            if self
                .read_seq
                .compare_exchange(read_seq, read_seq + 1, Ordering::Release, Ordering::Relaxed)
                .is_ok()
            {
                return Some(entry);
            }
            // A wrapping writer moved the pointer mid-read; start over at
            // its new position.
        }
    }

    /// Unread entries currently buffered.
    pub(super) fn len(&self) -> usize {
        let write = self.write_seq.load(Ordering::Relaxed);
        let read = self.read_seq.load(Ordering::Relaxed);
        write.saturating_sub(read)
    }

    /// Entries lost to overwrites so far.
    pub(super) fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Discards all unread entries.
    pub(super) fn clear(&self) {
        while self.read().is_some() {}
    }
}
