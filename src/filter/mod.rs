// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Determinate whether a log record should be buffered for mail delivery.

use std::fmt;

use log::LevelFilter;
use log::Metadata;
use log::Record;

mod env_filter;

pub use self::env_filter::DEFAULT_FILTER;
pub use self::env_filter::DEFAULT_FILTER_ENV;
pub use self::env_filter::EnvFilter;
pub use self::env_filter::EnvFilterBuilder;

/// The result of a filter check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    /// The record will be processed without further filtering.
    Accept,
    /// The record should not be processed.
    Reject,
    /// No decision could be made, further filtering should occur.
    Neutral,
}

/// A filter that can be applied to log records.
pub trait Filter: fmt::Debug + Send + Sync + 'static {
    /// Whether the record metadata passes the filter.
    fn enabled(&self, metadata: &Metadata) -> FilterResult;

    /// Whether the record passes the filter.
    ///
    /// Default to check the metadata only.
    fn matches(&self, record: &Record) -> FilterResult {
        self.enabled(record.metadata())
    }
}

impl<T: Filter> From<T> for Box<dyn Filter> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

impl Filter for LevelFilter {
    fn enabled(&self, metadata: &Metadata) -> FilterResult {
        if metadata.level() <= *self {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    fn metadata(level: Level) -> Metadata<'static> {
        Metadata::builder().level(level).target("app").build()
    }

    #[test]
    fn test_level_filter() {
        let filter = LevelFilter::Warn;
        assert_eq!(filter.enabled(&metadata(Level::Error)), FilterResult::Neutral);
        assert_eq!(filter.enabled(&metadata(Level::Warn)), FilterResult::Neutral);
        assert_eq!(filter.enabled(&metadata(Level::Info)), FilterResult::Reject);
        assert_eq!(
            LevelFilter::Off.enabled(&metadata(Level::Error)),
            FilterResult::Reject
        );
    }
}
