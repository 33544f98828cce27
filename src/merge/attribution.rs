use crate::models::{AttributedWord, SpeakerInterval, Word};

/// Assign each transcribed word to the diarization interval that best
/// covers it.
///
/// Both inputs are stable-sorted by start time first; nothing relies on the
/// order the engines emitted them in. A word is a candidate for an interval
/// when its start lies inside `[interval.start, interval.end)`. Among
/// candidates the interval with the greatest temporal overlap with the word
/// wins, ties going to the earlier interval, so every word is attributed at
/// most once. Words covered by no interval are dropped.
pub fn attribute_words(words: &[Word], intervals: &[SpeakerInterval]) -> Vec<AttributedWord> {
    let mut words: Vec<&Word> = words.iter().collect();
    words.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut intervals: Vec<&SpeakerInterval> = intervals.iter().collect();
    intervals.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut attributed = Vec::with_capacity(words.len());
    for word in words {
        let mut best: Option<(&SpeakerInterval, f64)> = None;
        for interval in &intervals {
            if interval.start > word.start {
                break;
            }
            if !interval.covers(word.start) {
                continue;
            }
            let overlap = interval.overlap(word.start, word.end);
            let better = match best {
                None => true,
                Some((_, best_overlap)) => overlap > best_overlap,
            };
            if better {
                best = Some((*interval, overlap));
            }
        }
        if let Some((interval, _)) = best {
            attributed.push(AttributedWord {
                word: word.clone(),
                tag: interval.tag.clone(),
            });
        }
    }

    attributed
}
