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

//! Capabilities of the mail transport that email appenders deliver through.
//!
//! This crate does not speak SMTP or any other transport protocol. Applications plug in their
//! own transport by implementing [`Mailer`] and [`Message`].

use std::fmt;

use crate::Error;
use crate::ErrorKind;

const INVALID_RECIPIENTS: &str =
    r#"The "to" argument must be an array or string and must not be empty."#;

fn invalid_recipients() -> Error {
    Error::new(ErrorKind::InvalidArgument, INVALID_RECIPIENTS)
}

/// A mail transport that composes and sends messages.
///
/// The mailer is shared between appenders, so implementations must be safe to call from
/// multiple threads. Timeouts and retries, if any, belong to the implementation.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
///
/// use logmail::mail::Mailer;
/// use logmail::mail::TextMessage;
///
/// #[derive(Debug)]
/// struct PrintMailer;
///
/// impl Mailer for PrintMailer {
///     type Message = TextMessage;
///     type Error = Infallible;
///
///     fn compose(&self) -> TextMessage {
///         TextMessage::default()
///     }
///
///     fn send(&self, message: TextMessage) -> Result<(), Infallible> {
///         println!("{}", message.text_body());
///         Ok(())
///     }
/// }
/// ```
pub trait Mailer: fmt::Debug + Send + Sync + 'static {
    /// The message type this mailer composes and sends.
    type Message: Message;

    /// The error returned when a message cannot be sent.
    type Error: Into<anyhow::Error>;

    /// Compose a new blank message.
    fn compose(&self) -> Self::Message;

    /// Send a message, blocking until the transport accepts or rejects it.
    fn send(&self, message: Self::Message) -> Result<(), Self::Error>;
}

/// A mail message under construction.
///
/// Every setter consumes the message and returns the updated one, so calls can be chained.
pub trait Message: Sized {
    /// Set the recipients.
    fn with_to(self, to: &Recipients) -> Self;

    /// Set the subject.
    fn with_subject(self, subject: impl Into<String>) -> Self;

    /// Set the plain text body.
    fn with_text_body(self, body: impl Into<String>) -> Self;
}

/// A single mail recipient, optionally with a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    address: String,
    name: Option<String>,
}

impl Recipient {
    /// Create a recipient with the given address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    /// Set the display name of the recipient.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The mail address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.address),
            None => f.write_str(&self.address),
        }
    }
}

impl From<&str> for Recipient {
    fn from(address: &str) -> Self {
        Recipient::new(address)
    }
}

impl From<String> for Recipient {
    fn from(address: String) -> Self {
        Recipient::new(address)
    }
}

impl<A, N> From<(A, N)> for Recipient
where
    A: Into<String>,
    N: Into<String>,
{
    fn from((address, name): (A, N)) -> Self {
        Recipient::new(address).with_name(name)
    }
}

/// A non-empty, ordered list of recipients.
///
/// Construction fails with [`ErrorKind::InvalidArgument`] if the list is empty, or if a single
/// address is given as an empty string. Addresses themselves are not checked.
///
/// # Examples
///
/// ```
/// use logmail::mail::Recipients;
///
/// let single = Recipients::try_from("admin@example.com").unwrap();
/// assert_eq!(single.len(), 1);
///
/// let named = Recipients::try_from(vec![
///     ("dev1@example.com", "Developer One"),
///     ("dev2@example.com", "Developer Two"),
/// ])
/// .unwrap();
/// assert_eq!(named.to_string(), "Developer One <dev1@example.com>, Developer Two <dev2@example.com>");
///
/// assert!(Recipients::try_from("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipients(Vec<Recipient>);

impl Recipients {
    /// Create a recipient list from any collection of recipients.
    pub fn new<I, R>(recipients: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = R>,
        R: Into<Recipient>,
    {
        let recipients = recipients.into_iter().map(Into::into).collect::<Vec<_>>();
        if recipients.is_empty() {
            return Err(invalid_recipients());
        }
        Ok(Self(recipients))
    }

    fn single(recipient: Recipient) -> Result<Self, Error> {
        if recipient.address.is_empty() {
            return Err(invalid_recipients());
        }
        Ok(Self(vec![recipient]))
    }

    /// The number of recipients.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if there are no recipients.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the recipients in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipient> {
        self.0.iter()
    }

    /// The recipients as a slice.
    pub fn as_slice(&self) -> &[Recipient] {
        &self.0
    }
}

impl fmt::Display for Recipients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, recipient) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{recipient}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Recipients {
    type Item = &'a Recipient;
    type IntoIter = std::slice::Iter<'a, Recipient>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<&str> for Recipients {
    type Error = Error;

    fn try_from(address: &str) -> Result<Self, Error> {
        Recipients::single(Recipient::new(address))
    }
}

impl TryFrom<String> for Recipients {
    type Error = Error;

    fn try_from(address: String) -> Result<Self, Error> {
        Recipients::single(Recipient::new(address))
    }
}

impl TryFrom<Recipient> for Recipients {
    type Error = Error;

    fn try_from(recipient: Recipient) -> Result<Self, Error> {
        Recipients::single(recipient)
    }
}

impl<R: Into<Recipient>> TryFrom<Vec<R>> for Recipients {
    type Error = Error;

    fn try_from(recipients: Vec<R>) -> Result<Self, Error> {
        Recipients::new(recipients)
    }
}

impl<R: Into<Recipient>, const N: usize> TryFrom<[R; N]> for Recipients {
    type Error = Error;

    fn try_from(recipients: [R; N]) -> Result<Self, Error> {
        Recipients::new(recipients)
    }
}

/// A plain text message holding recipients, subject and body.
///
/// Mailer implementations can use it as their [`Mailer::Message`] and translate it into their
/// transport's own message type on send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMessage {
    to: Vec<Recipient>,
    subject: String,
    text_body: String,
}

impl TextMessage {
    /// The recipients.
    pub fn to(&self) -> &[Recipient] {
        &self.to
    }

    /// The subject.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The plain text body.
    pub fn text_body(&self) -> &str {
        &self.text_body
    }
}

impl Message for TextMessage {
    fn with_to(mut self, to: &Recipients) -> Self {
        self.to = to.as_slice().to_vec();
        self
    }

    fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    fn with_text_body(mut self, body: impl Into<String>) -> Self {
        self.text_body = body.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipients_from_single_address() {
        let recipients = Recipients::try_from("developer@example.com").unwrap();
        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients.as_slice()[0].address(), "developer@example.com");
        assert_eq!(recipients.as_slice()[0].name(), None);
    }

    #[test]
    fn test_recipients_keep_order_and_names() {
        let recipients = Recipients::try_from(vec![
            Recipient::new("developer1@example.com").with_name("One"),
            Recipient::new("developer2@example.com"),
        ])
        .unwrap();

        let addresses = recipients.iter().map(Recipient::address).collect::<Vec<_>>();
        assert_eq!(addresses, ["developer1@example.com", "developer2@example.com"]);
        assert_eq!(
            recipients.to_string(),
            "One <developer1@example.com>, developer2@example.com"
        );
    }

    #[test]
    fn test_invalid_recipients() {
        let empty: Vec<&str> = vec![];
        let cases = [
            Recipients::try_from(""),
            Recipients::try_from(String::new()),
            Recipients::try_from(empty),
            Recipients::try_from(Recipient::new("").with_name("Nobody")),
        ];

        for case in cases {
            let err = case.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert_eq!(
                err.message(),
                r#"The "to" argument must be an array or string and must not be empty."#
            );
        }
    }

    #[test]
    fn test_non_empty_specs_are_accepted() {
        let blank = Recipients::try_from(" ").unwrap();
        assert_eq!(blank.as_slice()[0].address(), " ");

        let with_empty_entry = Recipients::try_from(["admin@example.com", ""]).unwrap();
        assert_eq!(with_empty_entry.len(), 2);
        assert!(!with_empty_entry.is_empty());
    }

    #[test]
    fn test_text_message_setters_chain() {
        let to = Recipients::try_from("admin@example.com").unwrap();
        let message = TextMessage::default()
            .with_to(&to)
            .with_subject("Application Log")
            .with_text_body("body\n");

        assert_eq!(message.to(), to.as_slice());
        assert_eq!(message.subject(), "Application Log");
        assert_eq!(message.text_body(), "body\n");
    }
}
