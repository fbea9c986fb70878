//! Record splitting for tab-separated collocation lines
//!
//! Corpus lines carry 8 positional fields:
//! `ID  lemma  lemPoS  coll  collPoS  MI  freq  [% coll < node]`
//! Only the lemma, collocate, and MI columns are consumed. All three are
//! carried as opaque strings: untrimmed, case-sensitive, never parsed as
//! numbers.

use crate::error::{RecordError, RecordResult};

/// Minimum number of tab-separated fields a line must carry for the
/// consumed columns to exist
pub const MIN_FIELDS: usize = 6;

/// Column index of the lemma (grouping key)
const LEMMA_FIELD: usize = 1;
/// Column index of the collocate
const COLLOCATE_FIELD: usize = 3;
/// Column index of the mutual-information score
const SCORE_FIELD: usize = 5;

/// Maximum characters of a malformed line echoed back in diagnostics
const PREVIEW_LEN: usize = 60;

/// One consumed corpus record: the three columns a conversion uses,
/// plus the 1-based source line for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollocationRecord {
    pub lemma: String,
    pub collocate: String,
    pub score: String,
    pub line_number: usize,
}

impl CollocationRecord {
    /// Split a corpus line on tabs and extract the consumed columns.
    ///
    /// A line with fewer than [`MIN_FIELDS`] fields is malformed and fails
    /// the whole pass; there is no skip-and-continue. Trailing columns
    /// beyond the score are not validated.
    pub fn parse(line: &str, line_number: usize) -> RecordResult<Self> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() < MIN_FIELDS {
            return Err(RecordError::new(line_number, fields.len())
                .with_preview(preview_of(line)));
        }

        Ok(Self {
            lemma: fields[LEMMA_FIELD].to_owned(),
            collocate: fields[COLLOCATE_FIELD].to_owned(),
            score: fields[SCORE_FIELD].to_owned(),
            line_number,
        })
    }
}

fn preview_of(line: &str) -> String {
    if line.chars().count() <= PREVIEW_LEN {
        line.to_owned()
    } else {
        let truncated: String = line.chars().take(PREVIEW_LEN).collect();
        format!("{}...", truncated)
    }
}
