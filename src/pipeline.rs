//! One-frame response latency bookkeeping
//!
//! The TLE75008-ESD clocks out the answer to frame *N-1* while frame *N* is
//! clocked in. [`Pipeline`] holds a single pending slot: the request whose
//! answer will arrive on the next exchange. Every exchange is recorded here,
//! and the returned [`Response`] says which request the received bits belong to.
//!
//! A no-op frame empties the slot, so a logical operation that ends with a
//! no-op exchange leaves nothing of its own behind for the next operation.

use crate::diagnosis::StandardDiagnosis;
use crate::frame::{Command, Frame, RegisterAddress, decode_register_value};

/// A request whose answer arrives on the following exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    /// Register read; the answer carries the register value in its low byte
    ReadRegister(RegisterAddress),
    /// Register write; the answer is the standard diagnosis
    WriteRegister(RegisterAddress),
    /// Standard diagnosis request; the answer is the full diagnosis word
    Diagnosis,
}

impl Request {
    /// Classify a frame that was sent
    ///
    /// Returns `None` for no-op frames, which expect nothing in particular.
    #[must_use]
    pub const fn from_frame(frame: Frame) -> Option<Self> {
        match frame.command() {
            Command::Read => Some(Self::ReadRegister(frame.address())),
            Command::Write => Some(Self::WriteRegister(frame.address())),
            Command::Control if frame.raw() == Frame::DIAGNOSIS_REQUEST.raw() => {
                Some(Self::Diagnosis)
            }
            Command::Control | Command::Reserved => None,
        }
    }
}

/// Bits received during one exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    /// Raw 16-bit response
    pub raw: u16,
    /// The request this response answers
    ///
    /// `None` when the previous frame was a no-op or the response is stale.
    /// The answer to a no-op is still a standard diagnosis word, it just
    /// belongs to no request.
    pub answers: Option<Request>,
}

impl Response {
    /// Register value carried in the low byte
    #[must_use]
    pub const fn value(self) -> u8 {
        decode_register_value(self.raw)
    }

    /// The response interpreted as a standard diagnosis word
    #[must_use]
    pub const fn diagnosis(self) -> StandardDiagnosis {
        StandardDiagnosis::from_raw(self.raw)
    }
}

/// Pending-response slot of length one
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pipeline {
    pending: Option<Request>,
}

impl Pipeline {
    /// Empty pipeline
    ///
    /// The first response after power-up is stale; it is reported as
    /// answering nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Record an exchange: `sent` was clocked out while `raw` was clocked in
    pub fn record(&mut self, sent: Frame, raw: u16) -> Response {
        let answers = core::mem::replace(&mut self.pending, Request::from_frame(sent));
        Response { raw, answers }
    }

    /// Request waiting for its answer
    #[must_use]
    pub const fn pending(&self) -> Option<Request> {
        self.pending
    }

    /// No response of ours is waiting to be clocked out
    #[must_use]
    pub const fn is_drained(&self) -> bool {
        self.pending.is_none()
    }

    /// Forget the pending request
    ///
    /// Used after a failed exchange, when it is unknown whether the frame
    /// reached the device.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
