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

use std::fmt;

use log::Record;

use crate::Error;
use crate::layout::Layout;

type FormatFunction = dyn Fn(&Record) -> Result<String, Error> + Send + Sync + 'static;

/// A layout that formats log records with a user-provided function.
///
/// # Examples
///
/// ```
/// use logmail::layout::CustomLayout;
///
/// let layout = CustomLayout::new(|record| {
///     Ok(format!("[{}] {}", record.level().as_str().to_lowercase(), record.args()))
/// });
/// ```
pub struct CustomLayout {
    f: Box<FormatFunction>,
}

impl fmt::Debug for CustomLayout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CustomLayout {{ ... }}")
    }
}

impl CustomLayout {
    /// Create a layout from a format function.
    pub fn new(
        layout: impl Fn(&Record) -> Result<String, Error> + Send + Sync + 'static,
    ) -> Self {
        CustomLayout {
            f: Box::new(layout),
        }
    }
}

impl Layout for CustomLayout {
    fn format(&self, record: &Record) -> Result<String, Error> {
        (self.f)(record)
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_custom_layout_formats_record() {
        let layout = CustomLayout::new(|record| {
            Ok(format!(
                "[{}] {}",
                record.level().as_str().to_lowercase(),
                record.args()
            ))
        });

        let text = layout
            .format(
                &Record::builder()
                    .args(format_args!("Message 4"))
                    .level(Level::Info)
                    .build(),
            )
            .unwrap();
        assert_eq!(text, "[info] Message 4");
    }

    #[test]
    fn test_custom_layout_propagates_error() {
        let layout = CustomLayout::new(|_| Err(Error::new(ErrorKind::Unexpected, "no format")));

        let err = layout
            .format(&Record::builder().args(format_args!("x")).build())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }
}
