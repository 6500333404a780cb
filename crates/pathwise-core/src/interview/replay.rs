//! Word-by-word replay of a finished reply.
//!
//! The provider returns a whole reply at once; the terminal re-emits it one
//! word at a time to simulate streaming. Splitting is lossy: runs of
//! whitespace inside a line collapse to a single space, every word is
//! followed by one space (so a space precedes each newline), and the
//! output always ends with a newline. Display timing lives in [`paced`],
//! not in the iterator.

use std::time::Duration;

use futures_util::Stream;

/// Lazy, single-pass fragment iterator over a reply.
///
/// Yields `"{word} "` for every whitespace-separated word and `"\n"` at the
/// end of every `\n`-separated line.
#[derive(Debug)]
pub struct Replay {
    text: String,
    cursor: usize,
    finished: bool,
}

/// Start replaying `text`.
pub fn replay(text: impl Into<String>) -> Replay {
    Replay {
        text: text.into(),
        cursor: 0,
        finished: false,
    }
}

impl Iterator for Replay {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        let rest = &self.text[self.cursor..];
        let skipped = rest
            .char_indices()
            .find(|&(_, c)| c == '\n' || !c.is_whitespace())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.cursor += skipped;
        let rest = &self.text[self.cursor..];

        match rest.chars().next() {
            None => {
                self.finished = true;
                Some("\n".to_string())
            }
            Some('\n') => {
                self.cursor += 1;
                Some("\n".to_string())
            }
            Some(_) => {
                let len = rest
                    .char_indices()
                    .find(|&(_, c)| c.is_whitespace())
                    .map(|(i, _)| i)
                    .unwrap_or(rest.len());
                let word = &rest[..len];
                self.cursor += len;
                Some(format!("{word} "))
            }
        }
    }
}

impl std::iter::FusedIterator for Replay {}

/// Uniform delay between replay fragments. Zero means "emit immediately".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pace(Duration);

impl Pace {
    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn is_none(&self) -> bool {
        self.0.is_zero()
    }

    pub fn delay(&self) -> Duration {
        self.0
    }
}

/// Turn a replay into a stream that waits `pace` before each fragment.
pub fn paced(fragments: Replay, pace: Pace) -> impl Stream<Item = String> + Send {
    async_stream::stream! {
        for fragment in fragments {
            if !pace.is_none() {
                tokio::time::sleep(pace.delay()).await;
            }
            yield fragment;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn test_replay_fragments_match_example() {
        let fragments: Vec<String> =
            replay("Good  answer.\nNext: describe a conflict you resolved.").collect();
        assert_eq!(
            fragments,
            vec![
                "Good ", "answer. ", "\n", "Next: ", "describe ", "a ", "conflict ", "you ",
                "resolved. ", "\n",
            ]
        );
    }

    #[test]
    fn test_replay_reconstruction_collapses_whitespace() {
        let text: String = replay("one \t two\nthree").collect();
        assert_eq!(text, "one two \nthree \n");
    }

    #[test]
    fn test_replay_empty_text_is_single_newline() {
        let fragments: Vec<String> = replay("").collect();
        assert_eq!(fragments, vec!["\n"]);
    }

    #[test]
    fn test_replay_blank_lines_preserved() {
        let fragments: Vec<String> = replay("a\n\nb\n").collect();
        assert_eq!(fragments, vec!["a ", "\n", "\n", "b ", "\n", "\n"]);
    }

    #[test]
    fn test_replay_handles_multibyte_words() {
        let text: String = replay("café  naïve").collect();
        assert_eq!(text, "café naïve \n");
    }

    #[test]
    fn test_replay_is_fused() {
        let mut fragments = replay("x");
        assert_eq!(fragments.next().as_deref(), Some("x "));
        assert_eq!(fragments.next().as_deref(), Some("\n"));
        assert_eq!(fragments.next(), None);
        assert_eq!(fragments.next(), None);
    }

    #[tokio::test]
    async fn test_paced_zero_emits_everything() {
        let fragments: Vec<String> = paced(replay("hi there"), Pace::none()).collect().await;
        assert_eq!(fragments, vec!["hi ", "there ", "\n"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paced_waits_between_fragments() {
        let start = tokio::time::Instant::now();
        let fragments: Vec<String> =
            paced(replay("a b"), Pace::from_millis(10)).collect().await;
        assert_eq!(fragments.len(), 3);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
