use anyhow::{bail, Result};

use crate::text::CharExt;

/// Grammatical stand-in for a participant of a templated message.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Noun {
    /// The reader of the message.
    You,
    /// A singular thing, name without article.
    It(String),
    /// Several things, name without article.
    Plural(String),
}

use Noun::*;

impl Noun {
    pub fn third_person_singular(&self) -> bool {
        matches!(self, It(_))
    }

    pub fn name(&self) -> &str {
        match self {
            You => "you",
            It(n) | Plural(n) => n,
        }
    }

    pub fn is_proper_noun(&self) -> bool {
        self.name().chars().next().map_or(false, char::is_uppercase)
    }

    pub fn the_name(&self) -> String {
        if matches!(self, You) || self.is_proper_noun() {
            self.name().into()
        } else {
            format!("the {}", self.name())
        }
    }

    pub fn a_name(&self) -> String {
        if matches!(self, You | Plural(_)) || self.is_proper_noun() {
            self.name().into()
        } else {
            let article =
                if self.name().chars().next().map_or(false, |c| c.is_vowel())
                {
                    "an"
                } else {
                    "a"
                };
            format!("{article} {}", self.name())
        }
    }

    pub fn their(&self) -> &str {
        match self {
            You => "your",
            It(_) => "its",
            Plural(_) => "their",
        }
    }

    pub fn possessive(&self) -> String {
        match self {
            You => "your".into(),
            n => format!("{}'s", n.the_name()),
        }
    }

    /// Expand a template token where this noun is the sentence subject.
    pub fn convert(&self, token: &str) -> Result<String> {
        let singular = self.third_person_singular();
        let pick = |a: &str, b: &str| -> String {
            if singular {
                a.into()
            } else {
                b.into()
            }
        };

        let ret = match token {
            "some" => self.a_name(),
            "one" => self.the_name(),
            "one's" => self.their().into(),

            // Verb endings, always agree with the subject.
            // hit/hits
            "s" => pick("s", ""),
            // lunge/lunges at you, slash/slashes
            "es" => pick("es", ""),
            // parry/parries
            "ies" => pick("ies", "y"),
            "is" | "are" => pick("is", "are"),
            "has" | "have" => pick("has", "have"),

            _ => bail!("bad token {token:?}"),
        };
        Ok(ret)
    }
}

/// Subject and object pair for templating two-party messages.
pub struct Sentence<'a> {
    subject: &'a Noun,
    object: &'a Noun,
}

impl<'a> Sentence<'a> {
    pub fn new(subject: &'a Noun, object: &'a Noun) -> Sentence<'a> {
        Sentence { subject, object }
    }

    pub fn convert(&self, token: &str) -> Result<String> {
        let ret = match token {
            "another" => self.object.the_name(),
            "a thing" => self.object.a_name(),
            "another's" => self.object.possessive(),
            _ => return self.subject.convert(token),
        };
        Ok(ret)
    }
}

#[cfg(test)]
mod test {
    use super::{
        Noun::{self, *},
        Sentence,
    };
    use crate::StrExt;

    fn noun(name: &str) -> Noun {
        match name {
            "PLAYER" => You,
            "3 rocks" => Plural(name.into()),
            thing => It(thing.into()),
        }
    }

    #[test]
    fn subject_templates() {
        for (subject, template, message) in [
            ("PLAYER", "[One] eat[s] the apple.", "You eat the apple."),
            ("newt", "[One] eat[s] the apple.", "The newt eats the apple."),
            ("PLAYER", "[One] die[s]!", "You die!"),
            ("bat", "[One] die[s]!", "The bat dies!"),
            ("PLAYER", "[One] [is] hungry.", "You are hungry."),
            ("Grog", "[One] [is] hungry.", "Grog is hungry."),
            ("fungus", "[One] parr[ies].", "The fungus parries."),
            ("PLAYER", "[One] parr[ies].", "You parry."),
            ("PLAYER", "[One] lurch[es] ahead.", "You lurch ahead."),
            ("newt", "[One] lurch[es] ahead.", "The newt lurches ahead."),
        ] {
            let n = noun(subject);
            assert_eq!(
                template.templatize(|e| n.convert(e)).unwrap(),
                message
            );
        }
    }

    #[test]
    fn object_templates() {
        for (subject, object, template, message) in [
            (
                "PLAYER",
                "bat",
                "[One] strike[s] [another] for 3 damage!",
                "You strike the bat for 3 damage!",
            ),
            (
                "bat",
                "PLAYER",
                "[One] strike[s] [another] for 3 damage!",
                "The bat strikes you for 3 damage!",
            ),
            (
                "newt",
                "apple",
                "[One] drop[s] [a thing].",
                "The newt drops an apple.",
            ),
            (
                "PLAYER",
                "3 rocks",
                "[One] pick[s] up [a thing].",
                "You pick up 3 rocks.",
            ),
            (
                "bat",
                "PLAYER",
                "[One] bite[s] [another's] ankle.",
                "The bat bites your ankle.",
            ),
            (
                "PLAYER",
                "newt",
                "[One] bite[s] [another's] tail.",
                "You bite the newt's tail.",
            ),
        ] {
            let a = noun(subject);
            let b = noun(object);
            assert_eq!(
                template
                    .templatize(|e| Sentence::new(&a, &b).convert(e))
                    .unwrap(),
                message
            );
        }
    }

    #[test]
    fn bad_token() {
        let n = It("bat".into());
        assert!("[One] [flap]".templatize(|e| n.convert(e)).is_err());
    }
}
