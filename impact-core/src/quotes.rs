//! Inspirational quotes shown alongside purchase feedback.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub author: &'static str,
    pub text: &'static str,
}

impl fmt::Display for Quote {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}

const fn quote(
    author: &'static str,
    text: &'static str,
) -> Quote {
    Quote { author, text }
}

pub static QUOTES: [Quote; 12] = [
    quote(
        "Avatar (2009)",
        "Everything is backwards now, like out there is the true world, and in here is the dream.",
    ),
    quote(
        "Greta Thunberg",
        "I want you to act as if the house is on fire, because it is.",
    ),
    quote(
        "Wall-E (2008)",
        "If you don't take care of the world, it won't be there for you to live in.",
    ),
    quote(
        "David Attenborough",
        "An understanding of the natural world is a source of great fulfillment.",
    ),
    quote(
        "Interstellar (2014)",
        "We used up the Earth's resources a long time ago.",
    ),
    quote("Jane Goodall", "What you do makes a difference."),
    quote(
        "The Lorax (Dr. Seuss)",
        "Unless someone like you cares a whole awful lot, nothing is going to get better.",
    ),
    quote(
        "Leonardo DiCaprio",
        "Climate change is real. It is happening right now.",
    ),
    quote(
        "Wangari Maathai",
        "It's the little things citizens do that will make the difference.",
    ),
    quote(
        "Chief Seattle",
        "We do not inherit the Earth from our ancestors; we borrow it from our children.",
    ),
    quote(
        "Wendell Berry",
        "Wealth consists not in having great possessions, but in having few wants.",
    ),
    quote(
        "Ralph Waldo Emerson",
        "What lies behind us and what lies before us are tiny matters compared to what lies within us.",
    ),
];

/// Picks a quote using `rng`.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static Quote {
    // QUOTES is a non-empty constant.
    QUOTES.choose(rng).unwrap_or(&QUOTES[0])
}

/// Picks a quote from the thread-local generator.
pub fn pick_quote() -> &'static Quote {
    random_quote(&mut rand::thread_rng())
}
