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

use std::borrow::Cow;
use std::str::FromStr;

use log::LevelFilter;
use log::Metadata;
use log::Record;

use crate::Error;
use crate::ErrorKind;
use crate::filter::Filter;
use crate::filter::FilterResult;

/// The default environment variable for filtering mailed logs.
pub const DEFAULT_FILTER_ENV: &str = "LOGMAIL_LOG";

/// The directive used when the environment variable is not set: warnings and above.
pub const DEFAULT_FILTER: &str = "warn";

/// A filter consults the `env_logger` style directives, e.g., `warn,app::billing=error`.
#[derive(Debug)]
pub struct EnvFilter(env_filter::Filter);

impl EnvFilter {
    /// Initialize the filter from the [EnvFilterBuilder].
    pub fn new(mut builder: EnvFilterBuilder) -> Self {
        EnvFilter(builder.0.build())
    }

    /// Initialize the filter from the environment using default variable name `LOGMAIL_LOG`.
    /// If the variable is not set, [`DEFAULT_FILTER`] will be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logmail::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env();
    /// ```
    pub fn from_default_env() -> Self {
        EnvFilter::from_env_or(DEFAULT_FILTER_ENV, DEFAULT_FILTER)
    }

    /// Initialize the filter from the environment using default variable name `LOGMAIL_LOG`.
    /// If the variable is not set, the default value will be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logmail::filter::EnvFilter;
    /// let filter = EnvFilter::from_default_env_or("warn");
    /// ```
    pub fn from_default_env_or<'a, V>(default: V) -> Self
    where
        V: Into<Cow<'a, str>>,
    {
        EnvFilter::from_env_or(DEFAULT_FILTER_ENV, default)
    }

    /// Initialize the filter from the environment using specific variable name.
    /// If the variable is not set, the default value will be used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logmail::filter::EnvFilter;
    /// let filter = EnvFilter::from_env_or("MY_MAIL_LOG", "error");
    /// ```
    pub fn from_env_or<'a, 'b, E, V>(name: E, default: V) -> Self
    where
        E: Into<Cow<'a, str>>,
        V: Into<Cow<'b, str>>,
    {
        let name = name.into();
        let default = default.into();

        let builder = EnvFilterBuilder::new();
        if let Ok(s) = std::env::var(&*name) {
            EnvFilter::new(builder.parse(&s))
        } else {
            EnvFilter::new(builder.parse(&default))
        }
    }
}

impl Filter for EnvFilter {
    fn enabled(&self, metadata: &Metadata) -> FilterResult {
        if self.0.enabled(metadata) {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }

    fn matches(&self, record: &Record) -> FilterResult {
        if self.0.matches(record) {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }
}

impl From<LevelFilter> for EnvFilter {
    fn from(filter: LevelFilter) -> Self {
        EnvFilter::new(EnvFilterBuilder::new().filter_level(filter))
    }
}

impl<'a> From<&'a str> for EnvFilter {
    fn from(filter: &'a str) -> Self {
        EnvFilter::new(EnvFilterBuilder::new().parse(filter))
    }
}

impl FromStr for EnvFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnvFilterBuilder::new().try_parse(s).map(EnvFilter::new)
    }
}

/// A builder for the env log filter.
#[derive(Default, Debug)]
pub struct EnvFilterBuilder(env_filter::Builder);

impl EnvFilterBuilder {
    /// Initialize the filter builder with defaults.
    pub fn new() -> Self {
        EnvFilterBuilder(env_filter::Builder::new())
    }

    /// Add a directive to the filter for a specific module.
    pub fn filter_module(mut self, module: &str, level: LevelFilter) -> Self {
        self.0.filter_module(module, level);
        self
    }

    /// Add a directive to the filter for all modules.
    pub fn filter_level(mut self, level: LevelFilter) -> Self {
        self.0.filter_level(level);
        self
    }

    /// Parse the directive string, returning an error if the given directive string is invalid.
    pub fn try_parse(mut self, filters: &str) -> Result<Self, Error> {
        self.0.try_parse(filters).map_err(|err| {
            Error::new(ErrorKind::InvalidArgument, "failed to parse filter directives")
                .with_context("directives", filters)
                .with_source(err)
        })?;
        Ok(self)
    }

    /// Parse the directive string, ignoring invalid directives.
    pub fn parse(mut self, filters: &str) -> Self {
        self.0.parse(filters);
        self
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    fn metadata(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_directives_by_module() {
        let filter = EnvFilter::from("warn,app::billing=error");

        assert_eq!(
            filter.enabled(&metadata(Level::Warn, "app::http")),
            FilterResult::Neutral
        );
        assert_eq!(
            filter.enabled(&metadata(Level::Info, "app::http")),
            FilterResult::Reject
        );
        assert_eq!(
            filter.enabled(&metadata(Level::Warn, "app::billing")),
            FilterResult::Reject
        );
        assert_eq!(
            filter.enabled(&metadata(Level::Error, "app::billing")),
            FilterResult::Neutral
        );
    }

    #[test]
    fn test_from_env_or_falls_back_to_default() {
        let filter = EnvFilter::from_env_or("LOGMAIL_TEST_UNSET_VARIABLE", "error");
        assert_eq!(
            filter.enabled(&metadata(Level::Warn, "app")),
            FilterResult::Reject
        );
        assert_eq!(
            filter.enabled(&metadata(Level::Error, "app")),
            FilterResult::Neutral
        );
    }

    #[test]
    fn test_default_filter_passes_warnings_and_above() {
        let filter = EnvFilter::from_env_or("LOGMAIL_TEST_UNSET_VARIABLE", DEFAULT_FILTER);
        assert_eq!(
            filter.enabled(&metadata(Level::Info, "app")),
            FilterResult::Reject
        );
        assert_eq!(
            filter.enabled(&metadata(Level::Warn, "app")),
            FilterResult::Neutral
        );
        assert_eq!(
            filter.enabled(&metadata(Level::Error, "app")),
            FilterResult::Neutral
        );

        if std::env::var_os(DEFAULT_FILTER_ENV).is_none() {
            let filter = EnvFilter::from_default_env();
            assert_eq!(
                filter.enabled(&metadata(Level::Info, "app")),
                FilterResult::Reject
            );
            assert_eq!(
                filter.enabled(&metadata(Level::Warn, "app")),
                FilterResult::Neutral
            );
        }
    }

    #[test]
    fn test_invalid_directives() {
        let err = "app=notalevel".parse::<EnvFilter>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
