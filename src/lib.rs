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

//! Logmail buffers log records and delivers them by email.
//!
//! # Overview
//!
//! The [`append::Email`] appender formats every record it receives with a [`Layout`], keeps the
//! text in memory, and on flush sends all buffered records as the plain text body of one
//! message, wrapped at 70 columns. Mail transport is left to the application: implement
//! [`mail::Mailer`] over whatever client you already use.
//!
//! Records reach the appender through the `log` crate once a logger is installed with
//! [`builder`].
//!
//! # Examples
//!
//! ```
//! use std::convert::Infallible;
//! use std::sync::Arc;
//!
//! use log::LevelFilter;
//! use logmail::append::Email;
//! use logmail::layout::CustomLayout;
//! use logmail::mail::Mailer;
//! use logmail::mail::TextMessage;
//!
//! #[derive(Debug)]
//! struct StdoutMailer;
//!
//! impl Mailer for StdoutMailer {
//!     type Message = TextMessage;
//!     type Error = Infallible;
//!
//!     fn compose(&self) -> TextMessage {
//!         TextMessage::default()
//!     }
//!
//!     fn send(&self, message: TextMessage) -> Result<(), Infallible> {
//!         println!("Subject: {}\n\n{}", message.subject(), message.text_body());
//!         Ok(())
//!     }
//! }
//!
//! let email = Email::new(Arc::new(StdoutMailer), "admin@example.com")
//!     .unwrap()
//!     .with_subject("Application Log")
//!     .with_layout(CustomLayout::new(|record| {
//!         Ok(format!("[{}] {}", record.level(), record.args()))
//!     }));
//!
//! logmail::builder()
//!     .dispatch(|d| d.filter(LevelFilter::Warn).append(email))
//!     .apply();
//!
//! log::error!("Payment provider unreachable.");
//! log::logger().flush();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod filter;
pub mod layout;
pub mod mail;
pub mod wrap;

mod error;
pub use self::error::Error;
pub use self::error::ErrorKind;

pub use self::append::Append;
pub use self::filter::Filter;
pub use self::layout::Layout;

mod logger;
pub use self::logger::*;
