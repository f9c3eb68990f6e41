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

use std::io;
use std::io::Write;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use log::Record;

use crate::Error;
use crate::ErrorKind;
use crate::Layout;
use crate::append::Append;
use crate::layout::TextLayout;
use crate::mail::Mailer;
use crate::mail::Message;
use crate::mail::Recipients;
use crate::wrap::wordwrap;

/// The subject used when none, or an empty one, is configured.
pub const DEFAULT_SUBJECT: &str = "Application Log";

/// The number of buffered records that triggers an export without waiting for a flush.
pub const DEFAULT_EXPORT_INTERVAL: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

const BODY_WIDTH: usize = 70;
const SEPARATOR: &str = "\n";

/// An appender that buffers log records and mails them on flush.
///
/// Every export composes one message through the [`Mailer`], addressed to the configured
/// recipients, whose text body holds the buffered records, one per line, wrapped at 70
/// columns. Failures to send are reported as [`ErrorKind::ExportFailed`] and never retried.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use std::sync::Arc;
///
/// use logmail::append::Email;
/// use logmail::mail::Mailer;
/// use logmail::mail::TextMessage;
///
/// #[derive(Debug)]
/// struct NoopMailer;
///
/// impl Mailer for NoopMailer {
///     type Message = TextMessage;
///     type Error = Infallible;
///
///     fn compose(&self) -> TextMessage {
///         TextMessage::default()
///     }
///
///     fn send(&self, _: TextMessage) -> Result<(), Infallible> {
///         Ok(())
///     }
/// }
///
/// let email = Email::new(Arc::new(NoopMailer), "admin@example.com")
///     .unwrap()
///     .with_subject("Checkout service errors");
/// assert_eq!(email.subject(), "Checkout service errors");
/// ```
#[derive(Debug)]
pub struct Email<M: Mailer> {
    mailer: Arc<M>,
    to: Recipients,
    subject: String,
    layout: Box<dyn Layout>,
    export_interval: NonZeroUsize,
    buffer: Mutex<Vec<String>>,
}

impl<M: Mailer> Email<M> {
    /// Create a new `Email` appender delivering through `mailer` to `to`.
    ///
    /// No I/O happens here.
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::InvalidArgument`] error if `to` holds no recipient, or is a single
    /// empty address.
    pub fn new<R>(mailer: Arc<M>, to: R) -> Result<Self, Error>
    where
        R: TryInto<Recipients, Error = Error>,
    {
        let to = to.try_into()?;
        Ok(Self {
            mailer,
            to,
            subject: DEFAULT_SUBJECT.to_string(),
            layout: Box::new(TextLayout::default()),
            export_interval: DEFAULT_EXPORT_INTERVAL,
            buffer: Mutex::new(vec![]),
        })
    }

    /// Set the subject of exported messages.
    ///
    /// An empty subject falls back to [`DEFAULT_SUBJECT`].
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        let subject = subject.into();
        self.subject = if subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            subject
        };
        self
    }

    /// Set the layout that formats each record into a body line.
    ///
    /// Default to [`TextLayout`].
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set how many buffered records trigger an export before an explicit flush.
    ///
    /// Default to [`DEFAULT_EXPORT_INTERVAL`].
    pub fn with_export_interval(mut self, export_interval: NonZeroUsize) -> Self {
        self.export_interval = export_interval;
        self
    }

    /// The effective subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The recipients.
    pub fn recipients(&self) -> &Recipients {
        &self.to
    }

    /// Mail the given formatted records as one message.
    ///
    /// Each record is terminated by a newline and the joined text is wrapped at 70 columns.
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::ExportFailed`] error, with the mailer's error as its source, if
    /// the message cannot be sent. [`Error::message`] of that error is always
    /// `Unable to export log through email.`; its `Display` also lists the recipients and the
    /// source.
    pub fn export<S: AsRef<str>>(&self, messages: &[S]) -> Result<(), Error> {
        let body = wordwrap(&format_messages(messages, SEPARATOR), BODY_WIDTH);

        let message = self
            .mailer
            .compose()
            .with_to(&self.to)
            .with_subject(&self.subject)
            .with_text_body(body);

        self.mailer.send(message).map_err(|err| {
            Error::new(ErrorKind::ExportFailed, "Unable to export log through email.")
                .with_context("recipients", &self.to)
                .with_source(err)
        })
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M: Mailer> Append for Email<M> {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let text = self.layout.format(record)?;

        let batch = {
            let mut buffer = self.buffer();
            buffer.push(text);
            if buffer.len() < self.export_interval.get() {
                return Ok(());
            }
            std::mem::take(&mut *buffer)
        };

        self.export(&batch)
    }

    fn flush(&self) -> Result<(), Error> {
        // taken under the lock, sent outside it
        let batch = std::mem::take(&mut *self.buffer());
        if batch.is_empty() {
            return Ok(());
        }
        self.export(&batch)
    }
}

impl<M: Mailer> Drop for Email<M> {
    fn drop(&mut self) {
        if let Err(err) = self.flush() {
            let _ = writeln!(io::stderr(), "{err}");
        }
    }
}

fn format_messages<S: AsRef<str>>(messages: &[S], separator: &str) -> String {
    let mut text = String::new();
    for message in messages {
        text.push_str(message.as_ref());
        text.push_str(separator);
    }
    text
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::mail::TextMessage;

    #[derive(Debug, Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<TextMessage>>,
    }

    impl Mailer for RecordingMailer {
        type Message = TextMessage;
        type Error = io::Error;

        fn compose(&self) -> TextMessage {
            TextMessage::default()
        }

        fn send(&self, message: TextMessage) -> Result<(), io::Error> {
            self.sent.lock().unwrap().push(message);
            Ok(())
        }
    }

    #[test]
    fn test_format_messages_terminates_each_record() {
        assert_eq!(format_messages(&["a", "b"], "\n"), "a\nb\n");
        assert_eq!(format_messages::<&str>(&[], "\n"), "");
    }

    #[test]
    fn test_empty_subject_falls_back_to_default() {
        let mailer = Arc::new(RecordingMailer::default());

        let email = Email::new(mailer.clone(), "developer@example.com").unwrap();
        assert_eq!(email.subject(), DEFAULT_SUBJECT);

        let email = email.with_subject("");
        assert_eq!(email.subject(), "Application Log");

        let email = email.with_subject("Hello world");
        assert_eq!(email.subject(), "Hello world");
    }

    #[test]
    fn test_export_wraps_body() {
        let mailer = Arc::new(RecordingMailer::default());
        let email = Email::new(mailer.clone(), ["developer1@example.com", "developer2@example.com"])
            .unwrap();

        email
            .export(&["[info] A looooooooooooooooooooooooooooooooooooooooooooooooooooooooooong"])
            .unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].text_body(),
            "[info] A\nlooooooooooooooooooooooooooooooooooooooooooooooooooooooooooong\n"
        );
        assert_eq!(sent[0].subject(), "Application Log");
        assert_eq!(sent[0].to(), email.recipients().as_slice());
    }
}
