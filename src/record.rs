// src/record.rs
//
// The fixed row schema of the results feed. Every field is always present;
// a value the feed did not provide is the empty string.

use crate::config::consts::DEFAULT_CATEGORY;

/// One column of the schema, in feed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Category,
    Date,
    Lottery,
    Schedule,
    TripleNumber,
    TerminalAB,
    TerminalC,
    Number,
    Sign,
    Cacho,
    Animal,
}

impl Field {
    /// Schema order. Export walks this; free-text search walks it minus the category.
    pub const ALL: [Field; 11] = [
        Field::Category,
        Field::Date,
        Field::Lottery,
        Field::Schedule,
        Field::TripleNumber,
        Field::TerminalAB,
        Field::TerminalC,
        Field::Number,
        Field::Sign,
        Field::Cacho,
        Field::Animal,
    ];

    /// Header key as written in the feed (lower-case).
    pub fn key(self) -> &'static str {
        match self {
            Field::Category => "categoria",
            Field::Date => "fecha",
            Field::Lottery => "loteria",
            Field::Schedule => "horario",
            Field::TripleNumber => "triple",
            Field::TerminalAB => "terminal_a_b",
            Field::TerminalC => "terminal_c",
            Field::Number => "numero",
            Field::Sign => "signo",
            Field::Cacho => "cacho",
            Field::Animal => "animal",
        }
    }

    /// Human label for cards and table headers.
    pub fn label(self) -> &'static str {
        match self {
            Field::Category => "Categoría",
            Field::Date => "Fecha",
            Field::Lottery => "Lotería",
            Field::Schedule => "Horario",
            Field::TripleNumber => "Triple",
            Field::TerminalAB => "Terminal A/B",
            Field::TerminalC => "Terminal C",
            Field::Number => "Número",
            Field::Sign => "Signo",
            Field::Cacho => "Cacho",
            Field::Animal => "Animal",
        }
    }

    /// Look up a header cell. Caller lower-cases first.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Fields that carry a draw result rather than identify the draw.
    pub fn is_result(self) -> bool {
        !matches!(self, Field::Category | Field::Date | Field::Lottery | Field::Schedule)
    }
}

/// One normalized feed row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    pub category: String,
    pub date: String,
    pub lottery: String,
    pub schedule: String,
    pub triple_number: String,
    pub terminal_ab: String,
    pub terminal_c: String,
    pub number: String,
    pub sign: String,
    pub cacho: String,
    pub animal: String,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            category: s!(DEFAULT_CATEGORY),
            date: s!(),
            lottery: s!(),
            schedule: s!(),
            triple_number: s!(),
            terminal_ab: s!(),
            terminal_c: s!(),
            number: s!(),
            sign: s!(),
            cacho: s!(),
            animal: s!(),
        }
    }
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Category => &self.category,
            Field::Date => &self.date,
            Field::Lottery => &self.lottery,
            Field::Schedule => &self.schedule,
            Field::TripleNumber => &self.triple_number,
            Field::TerminalAB => &self.terminal_ab,
            Field::TerminalC => &self.terminal_c,
            Field::Number => &self.number,
            Field::Sign => &self.sign,
            Field::Cacho => &self.cacho,
            Field::Animal => &self.animal,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Category => &mut self.category,
            Field::Date => &mut self.date,
            Field::Lottery => &mut self.lottery,
            Field::Schedule => &mut self.schedule,
            Field::TripleNumber => &mut self.triple_number,
            Field::TerminalAB => &mut self.terminal_ab,
            Field::TerminalC => &mut self.terminal_c,
            Field::Number => &mut self.number,
            Field::Sign => &mut self.sign,
            Field::Cacho => &mut self.cacho,
            Field::Animal => &mut self.animal,
        };
        *slot = value;
    }

    /// All values in schema order, e.g. for an export row.
    pub fn values(&self) -> Vec<String> {
        Field::ALL.iter().map(|&f| s!(self.get(f))).collect()
    }

    /// Lower-cased, space-joined values in schema order, category left out
    /// (it is the active tab, so it would match every row). Free-text search runs on this.
    pub fn search_text(&self) -> String {
        let mut out = String::new();
        for (i, f) in Field::ALL[1..].iter().enumerate() {
            if i > 0 { out.push(' '); }
            out.push_str(self.get(*f));
        }
        out.to_lowercase()
    }

    /// Card title: lottery and schedule, whichever are present.
    pub fn headline(&self) -> String {
        match (self.lottery.is_empty(), self.schedule.is_empty()) {
            (false, false) => join!(&self.lottery, " · ", &self.schedule),
            (false, true) => self.lottery.clone(),
            (true, false) => self.schedule.clone(),
            (true, true) => s!("(sin lotería)"),
        }
    }

    /// Non-empty result fields with their labels, schema order.
    /// Which ones are set depends on the lottery (triple, terminals, chance, animal...).
    pub fn display_fields(&self) -> Vec<(&'static str, &str)> {
        Field::ALL
            .iter()
            .filter(|f| f.is_result())
            .map(|&f| (f.label(), self.get(f)))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }
}
