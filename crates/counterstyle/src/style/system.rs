//! Primitive counter systems.
//!
//! Each constructor validates its symbol table and returns a base
//! [`CounterStyle`] carrying the system's natural domain. Realistic bounds,
//! such as 1..=3999 for Roman numerals, are layered on with
//! [`CounterStyle::range`].

use std::collections::BTreeMap;
use std::sync::Arc;

use super::counter::CounterStyle;
use super::error::CounterStyleError;

/// Upper bound on the byte length of a label built by repetition.
///
/// Symbolic and additive systems repeat symbols in proportion to the index;
/// past this size they decline and the fallback takes over.
pub const MAX_LABEL_BYTES: usize = 1 << 16;

/// The algorithm a primitive counter style uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum System {
    Cyclic,
    Fixed,
    Symbolic,
    Alphabetic,
    Numeric,
    Additive,
}

impl System {
    /// The CSS keyword for this system.
    pub fn as_str(self) -> &'static str {
        match self {
            System::Cyclic => "cyclic",
            System::Fixed => "fixed",
            System::Symbolic => "symbolic",
            System::Alphabetic => "alphabetic",
            System::Numeric => "numeric",
            System::Additive => "additive",
        }
    }

    /// Fewest symbols the system can work with.
    pub fn minimum_symbols(self) -> usize {
        match self {
            System::Alphabetic | System::Numeric => 2,
            _ => 1,
        }
    }
}

impl std::fmt::Display for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn collect_symbols<I, S>(system: System, symbols: I) -> Result<Arc<[String]>, CounterStyleError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
    let minimum = system.minimum_symbols();
    if symbols.len() < minimum {
        return Err(CounterStyleError::TooFewSymbols {
            system,
            minimum,
            found: symbols.len(),
        });
    }
    Ok(symbols.into())
}

/// Picks `symbols[(index - 1) mod len]`, wrapping for any index.
fn cyclic_symbol(symbols: &[String], index: i64) -> Option<&String> {
    let len = i128::try_from(symbols.len()).ok()?;
    let slot = (i128::from(index) - 1).checked_rem_euclid(len)?;
    symbols.get(usize::try_from(slot).ok()?)
}

fn repeat_bounded(symbol: &str, count: u64) -> Option<String> {
    let count = usize::try_from(count).ok()?;
    let bytes = symbol.len().checked_mul(count)?;
    (bytes <= MAX_LABEL_BYTES).then(|| symbol.repeat(count))
}

/// Writes `value` in base `symbols.len()`, most significant digit first.
///
/// With `bijective` set there is no zero digit: every step borrows one, as
/// in spreadsheet column names.
fn positional(symbols: &[String], mut value: u64, bijective: bool) -> Option<String> {
    let base = u64::try_from(symbols.len()).ok()?;
    if base < 2 {
        return None;
    }

    let mut digits = Vec::new();
    while value > 0 {
        if bijective {
            value -= 1;
        }
        digits.push(symbols.get(usize::try_from(value % base).ok()?)?);
        value /= base;
    }
    Some(digits.iter().rev().map(|digit| digit.as_str()).collect())
}

impl CounterStyle {
    /// Cycles through `symbols` forever, for every integer index.
    ///
    /// # Errors
    ///
    /// Fails when `symbols` is empty.
    pub fn cyclic<I, S>(symbols: I) -> Result<Self, CounterStyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        collect_symbols(System::Cyclic, symbols).map(Self::cyclic_from)
    }

    pub(crate) fn cyclic_from(symbols: Arc<[String]>) -> Self {
        Self::raw(move |index, _| cyclic_symbol(&symbols, index).cloned())
    }

    /// Uses each symbol once, for indices `1..=symbols.len()`.
    ///
    /// # Errors
    ///
    /// Fails when `symbols` is empty.
    pub fn fixed<I, S>(symbols: I) -> Result<Self, CounterStyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        collect_symbols(System::Fixed, symbols).map(Self::fixed_from)
    }

    pub(crate) fn fixed_from(symbols: Arc<[String]>) -> Self {
        let max = i64::try_from(symbols.len()).unwrap_or(i64::MAX);
        Self::raw(move |index, _| {
            let slot = usize::try_from(index.checked_sub(1)?).ok()?;
            symbols.get(slot).cloned()
        })
        .range(1, max)
    }

    /// Cycles through `symbols`, repeating each one more time per round.
    ///
    /// With `*` and `†` this yields `*`, `†`, `**`, `††`, `***`, ...
    ///
    /// # Errors
    ///
    /// Fails when `symbols` is empty.
    pub fn symbolic<I, S>(symbols: I) -> Result<Self, CounterStyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        collect_symbols(System::Symbolic, symbols).map(Self::symbolic_from)
    }

    pub(crate) fn symbolic_from(symbols: Arc<[String]>) -> Self {
        Self::raw(move |index, _| {
            let len = u64::try_from(symbols.len()).ok()?;
            let offset = u64::try_from(index.checked_sub(1)?).ok()?;
            let symbol = symbols.get(usize::try_from(offset.checked_rem(len)?).ok()?)?;
            repeat_bounded(symbol, offset / len + 1)
        })
        .range(1, i64::MAX)
    }

    /// Bijective base-N numbering without a zero digit: `a`..`z`, `aa`, `ab`, ...
    ///
    /// # Errors
    ///
    /// Fails with fewer than two symbols.
    pub fn alphabetic<I, S>(symbols: I) -> Result<Self, CounterStyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        collect_symbols(System::Alphabetic, symbols).map(Self::alphabetic_from)
    }

    pub(crate) fn alphabetic_from(symbols: Arc<[String]>) -> Self {
        Self::raw(move |index, _| positional(&symbols, u64::try_from(index).ok()?, true))
            .range(1, i64::MAX)
    }

    /// Positional base-N numbering whose first symbol is the zero digit.
    ///
    /// # Errors
    ///
    /// Fails with fewer than two symbols.
    pub fn numeric<I, S>(symbols: I) -> Result<Self, CounterStyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        collect_symbols(System::Numeric, symbols).map(Self::numeric_from)
    }

    pub(crate) fn numeric_from(symbols: Arc<[String]>) -> Self {
        Self::raw(move |index, _| match index {
            0 => symbols.first().cloned(),
            _ => positional(&symbols, u64::try_from(index).ok()?, false),
        })
        .range(0, i64::MAX)
    }

    /// Sign-value numbering from weighted symbols, like Roman numerals.
    ///
    /// Weights are consumed greedily from the largest down. An index the
    /// weights cannot sum to exactly is declined. A symbol at weight `0`
    /// renders index zero and extends the domain to include it.
    ///
    /// Later entries win when a weight appears twice.
    ///
    /// # Errors
    ///
    /// Fails when no weight is greater than zero.
    pub fn additive<I, S>(symbols: I) -> Result<Self, CounterStyleError>
    where
        I: IntoIterator<Item = (u64, S)>,
        S: Into<String>,
    {
        let table: BTreeMap<u64, String> = symbols
            .into_iter()
            .map(|(weight, symbol)| (weight, symbol.into()))
            .collect();
        if table.keys().all(|weight| *weight == 0) {
            return Err(CounterStyleError::NoPositiveWeights);
        }
        Ok(Self::additive_from(table))
    }

    pub(crate) fn additive_from(mut table: BTreeMap<u64, String>) -> Self {
        let zero = table.remove(&0);
        let min = if zero.is_some() { 0 } else { 1 };
        let weights: Vec<(u64, String)> = table.into_iter().rev().collect();

        Self::raw(move |index, _| {
            if index == 0 {
                return zero.clone();
            }

            let mut rest = u64::try_from(index).ok()?;
            let mut label = String::new();
            for (weight, symbol) in &weights {
                if rest >= *weight {
                    label.push_str(&repeat_bounded(symbol, rest / weight)?);
                    rest %= weight;
                    if label.len() > MAX_LABEL_BYTES {
                        return None;
                    }
                }
            }
            (rest == 0).then_some(label)
        })
        .range(min, i64::MAX)
    }
}
