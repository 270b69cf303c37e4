use super::note::Note;

/// A note placed on the playback timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledNote {
    /// Pitch in Hz, copied from the source note
    pub frequency: f32,
    /// Seconds from playback start
    pub offset: f64,
    /// Seconds the note sounds for
    pub duration: f64,
}

impl ScheduledNote {
    /// Seconds from playback start at which the note ends
    pub fn stop(&self) -> f64 {
        self.offset + self.duration
    }
}

/// Back-to-back timeline derived from an ordered note sequence
///
/// Note i starts at the running sum of the durations before it, so the
/// whole schedule spans the sum of all durations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub entries: Vec<ScheduledNote>,
    /// Total length in seconds
    pub span: f64,
}

impl Schedule {
    pub fn from_notes(notes: &[Note]) -> Self {
        let mut entries = Vec::with_capacity(notes.len());
        let span = notes.iter().fold(0.0, |offset, note| {
            entries.push(ScheduledNote {
                frequency: note.frequency,
                offset,
                duration: note.duration,
            });
            offset + note.duration
        });

        Self { entries, span }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledNote> {
        self.entries.iter()
    }

    /// Start offsets, in order
    pub fn offsets(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.offset)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduledNote;
    type IntoIter = std::slice::Iter<'a, ScheduledNote>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_note_ringtone() {
        let schedule = Schedule::from_notes(&[Note::new(440.0, 0.5), Note::new(880.0, 0.25)]);

        assert_eq!(
            schedule.entries,
            vec![
                ScheduledNote {
                    frequency: 440.0,
                    offset: 0.0,
                    duration: 0.5
                },
                ScheduledNote {
                    frequency: 880.0,
                    offset: 0.5,
                    duration: 0.25
                },
            ]
        );
        assert_eq!(schedule.entries[0].stop(), 0.5);
        assert_eq!(schedule.entries[1].stop(), 0.75);
        assert_eq!(schedule.span, 0.75);
    }

    #[test]
    fn offsets_are_running_sums() {
        let durations = [0.1, 0.3, 0.05, 0.7, 0.2, 0.15];
        let notes: Vec<Note> = durations
            .iter()
            .enumerate()
            .map(|(i, &d)| Note::new(200.0 + i as f32 * 50.0, d))
            .collect();
        let schedule = Schedule::from_notes(&notes);

        for (i, offset) in schedule.offsets().enumerate() {
            let expected: f64 = durations[..i].iter().sum();
            assert!((offset - expected).abs() < 1e-12, "note {i}");
        }
        let total: f64 = durations.iter().sum();
        assert!((schedule.span - total).abs() < 1e-12);
    }

    #[test]
    fn empty_sequence_has_no_entries() {
        let schedule = Schedule::from_notes(&[]);
        assert!(schedule.is_empty());
        assert_eq!(schedule.span, 0.0);
    }

    #[test]
    fn frequencies_are_copied_exactly() {
        let notes = [Note::new(329.627_56, 0.2), Note::new(0.001, 0.1)];
        let schedule = Schedule::from_notes(&notes);
        for (note, entry) in notes.iter().zip(&schedule) {
            assert_eq!(note.frequency, entry.frequency);
        }
    }
}
