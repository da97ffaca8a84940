use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest topic accepted from onboarding or the goal editor.
pub const MAX_TOPIC_CHARS: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GoalError {
    #[error("learning topic cannot be empty")]
    EmptyTopic,

    #[error("learning topic is too long ({len} > {max} characters)")]
    TopicTooLong { len: usize, max: usize },

    #[error("unknown cadence: {0} (expected week, month or year)")]
    UnknownCadence(String),
}

/// The period a learner commits to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Week,
    Month,
    Year,
}

impl Cadence {
    /// Options in the order onboarding presents them.
    pub const ALL: [Cadence; 3] = [Cadence::Week, Cadence::Month, Cadence::Year];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Cadence::Week => "Week",
            Cadence::Month => "Month",
            Cadence::Year => "Year",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Cadence {
    type Err = GoalError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Cadence::ALL
            .into_iter()
            .find(|cadence| cadence.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GoalError::UnknownCadence(trimmed.to_owned()))
    }
}

/// What the learner wants to learn and how often.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningGoal {
    topic: String,
    cadence: Cadence,
}

impl LearningGoal {
    /// Validates and builds a goal. Surrounding whitespace is dropped.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::EmptyTopic` for a blank topic.
    /// Returns `GoalError::TopicTooLong` above `MAX_TOPIC_CHARS` characters.
    pub fn new(topic: impl AsRef<str>, cadence: Cadence) -> Result<Self, GoalError> {
        let topic = topic.as_ref().trim();
        if topic.is_empty() {
            return Err(GoalError::EmptyTopic);
        }
        let len = topic.chars().count();
        if len > MAX_TOPIC_CHARS {
            return Err(GoalError::TopicTooLong {
                len,
                max: MAX_TOPIC_CHARS,
            });
        }

        Ok(Self {
            topic: topic.to_owned(),
            cadence,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Heading shown above the counters, e.g. "Learning Swift".
    #[must_use]
    pub fn title(&self) -> String {
        format!("Learning {}", self.topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_trimmed() {
        let goal = LearningGoal::new("  Swift \n", Cadence::Month).unwrap();
        assert_eq!(goal.topic(), "Swift");
        assert_eq!(goal.title(), "Learning Swift");
        assert_eq!(goal.cadence(), Cadence::Month);
    }

    #[test]
    fn blank_topic_is_rejected() {
        assert_eq!(
            LearningGoal::new("   ", Cadence::Week),
            Err(GoalError::EmptyTopic)
        );
    }

    #[test]
    fn long_topic_is_rejected() {
        let topic = "a".repeat(MAX_TOPIC_CHARS + 1);
        assert_eq!(
            LearningGoal::new(&topic, Cadence::Year),
            Err(GoalError::TopicTooLong {
                len: MAX_TOPIC_CHARS + 1,
                max: MAX_TOPIC_CHARS,
            })
        );
    }

    #[test]
    fn cadence_parses_case_insensitively() {
        assert_eq!("week".parse::<Cadence>().unwrap(), Cadence::Week);
        assert_eq!(" MONTH ".parse::<Cadence>().unwrap(), Cadence::Month);
        assert_eq!("Year".parse::<Cadence>().unwrap(), Cadence::Year);
        assert!(matches!(
            "fortnight".parse::<Cadence>(),
            Err(GoalError::UnknownCadence(raw)) if raw == "fortnight"
        ));
    }
}
