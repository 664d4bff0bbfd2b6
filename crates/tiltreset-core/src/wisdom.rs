//! Daily quote rotation.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wisdom {
    pub text: &'static str,
    pub source: &'static str,
}

const fn quote(text: &'static str, source: &'static str) -> Wisdom {
    Wisdom { text, source }
}

pub const QUOTES: [Wisdom; 10] = [
    quote("The mind is everything. What you think you become.", "Buddha"),
    quote("In the middle of difficulty lies opportunity.", "Einstein"),
    quote("Focus on the journey, not the destination.", "Unknown"),
    quote("The only way to do great work is to love what you do.", "Steve Jobs"),
    quote(
        "Mental toughness is not about having no emotions, it's about managing them.",
        "Tony Robbins",
    ),
    quote(
        "The greatest weapon against stress is our ability to choose one thought over another.",
        "William James",
    ),
    quote("Your calm mind is the ultimate weapon against your challenges.", "Bryant McGill"),
    quote(
        "The present moment is filled with joy and happiness. If you are attentive, you will see it.",
        "Thich Nhat Hanh",
    ),
    quote("Pressure is a privilege - it only comes to those who earn it.", "Unknown"),
    quote(
        "The mind is like water. When it's turbulent, it's difficult to see. When it's calm, everything becomes clear.",
        "Prasanna Mahesh",
    ),
];

/// Quote for `date`, rotating by 1-based day of year.
pub fn wisdom_for_day(date: NaiveDate) -> Wisdom {
    QUOTES[date.ordinal() as usize % QUOTES.len()]
}
