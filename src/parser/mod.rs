//! Notation parser.
//!
//! Grammar:
//!
//! ```text
//! circuit  := '+' element* '-'
//! element  := resistor | 'x' | '_' | '*' | '||' | '|' | '=' | '-'
//! resistor := digit+ (('.' | ',') digit+)?
//! ```
//!
//! `*` is a single open/close toggle shared by the whole parse, so a circuit
//! holds at most one parallel group open at a time and groups never nest.

pub mod normalize;

use std::iter::Peekable;
use std::str::CharIndices;

use tracing::{debug, trace, warn};

use crate::circuit::{Component, ComponentKind, Sequence, BRANCH_DEPTH, MAIN_DEPTH};
use crate::error::ParserError;

pub const GENERATOR_MARKER: char = '+';
pub const TERMINATOR: char = '-';

/// Parses a circuit string into a normalized component sequence.
pub fn parse(input: &str) -> Result<Sequence, ParserError> {
    Parser::new(input).parse()
}

/// Checks the `+ ... -` framing that every circuit must carry.
pub fn validate_framing(input: &str) -> Result<(), ParserError> {
    if !input.starts_with(GENERATOR_MARKER) {
        return Err(ParserError::missing_generator_marker(input));
    }
    if input.len() < 2 || !input.ends_with(TERMINATOR) {
        return Err(ParserError::missing_terminator(input));
    }
    Ok(())
}

pub struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    components: Vec<Component>,
    depth: i32,
    group_open: bool,
    lead_assigned: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            components: Vec::new(),
            depth: MAIN_DEPTH,
            group_open: false,
            lead_assigned: false,
        }
    }

    pub fn parse(mut self) -> Result<Sequence, ParserError> {
        validate_framing(self.input)?;

        while let Some((position, c)) = self.chars.next() {
            match c {
                GENERATOR_MARKER => continue,
                '0'..='9' => {
                    let value = self.read_number(position, c)?;
                    self.push_resistor(value);
                }
                '.' | ',' => return Err(ParserError::malformed_number(c.to_string(), position)),
                'x' => self.push(Component::unknown(self.next_index(), self.depth)),
                '_' => self.push_marker(ComponentKind::SeriesConnector),
                TERMINATOR => self.push_marker(ComponentKind::Terminator),
                '*' => self.toggle_group(),
                '|' => {
                    if self.chars.next_if(|&(_, next)| next == '|').is_some() {
                        self.depth = BRANCH_DEPTH;
                        self.push_marker(ComponentKind::ParallelBranchStart);
                    } else {
                        self.push_marker(ComponentKind::Bend);
                    }
                }
                '=' => {
                    self.push_marker(ComponentKind::ParallelBranchEnd);
                    self.depth = MAIN_DEPTH;
                }
                other => {
                    warn!(position, character = %other, "skipping unrecognized character");
                }
            }
        }

        let components = normalize::ensure_generator_lead(self.components);
        debug!(
            components = components.len(),
            group_open = self.group_open,
            "parsed circuit"
        );
        Ok(Sequence::new(components))
    }

    /// Reads a decimal value whose first digit has already been consumed.
    /// Both `.` and `,` are accepted as the separator.
    fn read_number(&mut self, start: usize, first: char) -> Result<f64, ParserError> {
        let mut raw = String::from(first);
        let mut normalized = String::from(first);
        let mut separators = 0;

        while let Some((_, c)) = self
            .chars
            .next_if(|&(_, c)| c.is_ascii_digit() || c == '.' || c == ',')
        {
            raw.push(c);
            if c == '.' || c == ',' {
                separators += 1;
                normalized.push('.');
            } else {
                normalized.push(c);
            }
        }

        if separators > 1 || normalized.ends_with('.') {
            return Err(ParserError::malformed_number(raw, start));
        }

        normalized
            .parse::<f64>()
            .map_err(|_| ParserError::malformed_number(raw, start))
    }

    fn toggle_group(&mut self) {
        if self.group_open {
            self.push_marker(ComponentKind::ParallelGroupEnd);
        } else {
            self.push_marker(ComponentKind::ParallelGroupStart);
        }
        self.group_open = !self.group_open;
    }

    fn push_resistor(&mut self, value: f64) {
        let index = self.next_index();
        let component = if self.lead_assigned {
            Component::known(index, self.depth, value)
        } else {
            self.lead_assigned = true;
            Component::generator_lead(index, self.depth, value)
        };
        self.push(component);
    }

    fn push_marker(&mut self, kind: ComponentKind) {
        self.push(Component::marker(kind, self.next_index(), self.depth));
    }

    fn push(&mut self, component: Component) {
        trace!(
            index = component.sequence_index,
            kind = %component.kind,
            depth = component.depth,
            value = ?component.value,
            "component"
        );
        self.components.push(component);
    }

    fn next_index(&self) -> usize {
        self.components.len()
    }
}
