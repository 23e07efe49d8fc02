//! Block parser implementation.

use smallvec::SmallVec;

use crate::cursor::Cursor;
use crate::Range;

use super::classify::{classify_line, LineKind};
use super::event::{BlockEvent, ListKind};

/// Events produced by a single line: at most a list close, a list open
/// and an item's three events.
type LineEvents = SmallVec<[BlockEvent; 6]>;

/// Line-oriented block parser.
///
/// The only state carried between lines is which list, if any, is open.
/// A list is always closed before whatever ends it is emitted, and at most
/// one list is open at a time.
///
/// Also usable as an iterator of [`BlockEvent`]s.
pub struct BlockParser<'a> {
    /// Input bytes.
    input: &'a [u8],
    /// Current cursor position.
    cursor: Cursor<'a>,
    /// The list currently open, if any.
    open_list: Option<ListKind>,
    /// Events of the current line not yet handed out, in reverse order.
    pending: LineEvents,
    /// 1-based number of the last line consumed.
    line_no: usize,
    /// Set once end of input has been flushed.
    finished: bool,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: Cursor::new(input),
            open_list: None,
            pending: LineEvents::new(),
            line_no: 0,
            finished: false,
        }
    }

    /// Parse all remaining lines and collect events.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        events.extend(self.by_ref());
    }

    /// The list currently open, if any.
    pub fn open_list(&self) -> Option<ListKind> {
        self.open_list
    }

    /// Parse a single line into `events`.
    fn parse_line(&mut self, line: Range, events: &mut LineEvents) {
        let kind = classify_line(self.input, line);
        log::trace!("line {}: {:?}", self.line_no, kind);

        match kind {
            LineKind::Heading { level, text } => {
                self.close_list(events);
                events.push(BlockEvent::HeadingStart { level });
                push_text(text, events);
                events.push(BlockEvent::HeadingEnd { level });
            }
            LineKind::ListItem { kind, text } => {
                if self.open_list != Some(kind) {
                    self.close_list(events);
                    events.push(BlockEvent::ListStart { kind });
                    self.open_list = Some(kind);
                }
                events.push(BlockEvent::ListItemStart);
                push_text(text, events);
                events.push(BlockEvent::ListItemEnd);
            }
            LineKind::Plain(text) => {
                self.close_list(events);
                // Blank lines only end lists.
                if !text.is_empty() {
                    events.push(BlockEvent::ParagraphStart);
                    events.push(BlockEvent::Text(text));
                    events.push(BlockEvent::ParagraphEnd);
                }
            }
        }
    }

    /// Close the open list, if any.
    fn close_list(&mut self, events: &mut LineEvents) {
        if let Some(kind) = self.open_list.take() {
            events.push(BlockEvent::ListEnd { kind });
        }
    }

    /// Refill `pending` from the next line, or from the end-of-input flush.
    /// Returns false once there is nothing left to produce.
    fn refill(&mut self) -> bool {
        let mut events = LineEvents::new();
        while events.is_empty() {
            if self.cursor.is_eof() {
                if self.finished {
                    return false;
                }
                self.finished = true;
                self.close_list(&mut events);
                if events.is_empty() {
                    return false;
                }
            } else {
                let line = self.cursor.consume_line();
                self.line_no += 1;
                self.parse_line(line, &mut events);
            }
        }
        events.reverse();
        self.pending = events;
        true
    }
}

impl Iterator for BlockParser<'_> {
    type Item = BlockEvent;

    fn next(&mut self) -> Option<BlockEvent> {
        if self.pending.is_empty() && !self.refill() {
            return None;
        }
        self.pending.pop()
    }
}

#[inline]
fn push_text(text: Range, events: &mut LineEvents) {
    if !text.is_empty() {
        events.push(BlockEvent::Text(text));
    }
}
