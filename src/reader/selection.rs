// src/reader/selection.rs
use crate::frame::FrameHeader;
use crate::types::SurveyType;

/// Upper range bound, in meters, of the primary-channel view
pub const DEFAULT_MAX_RANGE_M: f32 = 60.0;

/// Predicate deciding which frames contribute a row to a sample matrix
///
/// Implemented for [`Selection`] and for any `Fn(&FrameHeader) -> bool`, so
/// ad-hoc closures work wherever a filter is accepted.
pub trait FrameFilter {
    fn matches(&self, header: &FrameHeader) -> bool;
}

impl<F> FrameFilter for F
where
    F: Fn(&FrameHeader) -> bool,
{
    fn matches(&self, header: &FrameHeader) -> bool {
        self(header)
    }
}

/// Conjunction of simple frame conditions; an empty selection matches everything
///
/// # Example
///
/// ```
/// use sonarlog_rs::reader::{FrameFilter, Selection};
/// use sonarlog_rs::types::SurveyType;
///
/// let selection = Selection::new()
///     .survey(SurveyType::Primary)
///     .max_range_below(60.0);
/// assert_eq!(selection, Selection::primary_display());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Selection {
    survey: Option<SurveyType>,
    max_range_below: Option<f32>,
    max_range_at_least: Option<f32>,
    min_range_at_least: Option<f32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary channel with a range under [`DEFAULT_MAX_RANGE_M`]
    pub fn primary_display() -> Self {
        Self::new()
            .survey(SurveyType::Primary)
            .max_range_below(DEFAULT_MAX_RANGE_M)
    }

    pub fn survey(mut self, survey: SurveyType) -> Self {
        self.survey = Some(survey);
        self
    }

    /// Keep frames whose `max_range` (meters) is strictly below `limit`
    pub fn max_range_below(mut self, limit: f32) -> Self {
        self.max_range_below = Some(limit);
        self
    }

    /// Keep frames whose `max_range` (meters) is at least `limit`
    pub fn max_range_at_least(mut self, limit: f32) -> Self {
        self.max_range_at_least = Some(limit);
        self
    }

    /// Keep frames whose `min_range` (meters) is at least `limit`
    pub fn min_range_at_least(mut self, limit: f32) -> Self {
        self.min_range_at_least = Some(limit);
        self
    }
}

impl FrameFilter for Selection {
    fn matches(&self, header: &FrameHeader) -> bool {
        self.survey.map_or(true, |survey| header.survey == survey)
            && self.max_range_below.map_or(true, |limit| header.max_range < limit)
            && self.max_range_at_least.map_or(true, |limit| header.max_range >= limit)
            && self.min_range_at_least.map_or(true, |limit| header.min_range >= limit)
    }
}
