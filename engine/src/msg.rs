//! Delivering notices about game events to entities that can read them.

use util::{Noun, Sentence, StrExt};

use crate::{ecs::MessageRecipient, prelude::*, MESSAGE_RADIUS};

impl Entity {
    /// Notices received since the last clear, oldest first.
    pub fn messages(&self, r: &impl AsRef<Runtime>) -> Vec<String> {
        self.get::<MessageRecipient>(r).0
    }

    pub fn clear_messages(&self, r: &mut impl AsMut<Runtime>) {
        self.with_mut::<MessageRecipient, _>(r, |m| m.clear());
    }
}

/// Send a notice to `recipient`.
///
/// `parties` are the subject and object entities of a grammar template like
/// `"[One] hit[s] [another]."`. The template is resolved separately for
/// every recipient, so the recipient sees itself as "you". Entities that
/// aren't message recipients ignore the notice.
pub fn send_message(
    r: &mut impl AsMut<Runtime>,
    recipient: Entity,
    text: &str,
    parties: &[Entity],
) {
    let r = r.as_mut();
    if !recipient.has_capability(r, Capability::MessageRecipient) {
        return;
    }

    let text = grammatize(r, recipient, text, parties);
    recipient.with_mut::<MessageRecipient, _>(r, |m| m.push(text));
}

/// Send a notice to every message recipient within `MESSAGE_RADIUS` of
/// center on the same level.
pub fn send_message_nearby(
    r: &mut impl AsMut<Runtime>,
    center: Location,
    text: &str,
    parties: &[Entity],
) {
    let r = r.as_mut();
    for e in r.map.entities_within_radius(center, MESSAGE_RADIUS) {
        send_message(r, e, text, parties);
    }
}

fn grammatize(
    r: &Runtime,
    reader: Entity,
    text: &str,
    parties: &[Entity],
) -> String {
    let ret = match parties {
        [] => return text.to_owned(),
        [subject] => {
            let subject = subject.noun(r, reader);
            text.templatize(|t| subject.convert(t))
        }
        [subject, object, ..] => {
            let (subject, object): (Noun, Noun) =
                (subject.noun(r, reader), object.noun(r, reader));
            text.templatize(|t| Sentence::new(&subject, &object).convert(t))
        }
    };

    match ret {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Bad message template {text:?}: {e}");
            text.to_owned()
        }
    }
}

/// Send a formatted notice to an entity.
///
/// Grammar template parties follow a semicolon:
/// `msg!(r, target, "[One] hit[s] [another] for {} damage."; attacker, target)`
#[macro_export]
macro_rules! msg {
    ($r:expr, $to:expr, $fmt:expr $(, $arg:expr)* $(; $($party:expr),+)?) => {{
        // Format first, the arguments may borrow the runtime.
        let __txt = format!($fmt $(, $arg)*);
        let __to: $crate::Entity = $to;
        let __parties: &[$crate::Entity] = &[$($($party),+)?];
        $crate::send_message($r, __to, &__txt, __parties);
    }};
}

/// Send a formatted notice to everyone near a location.
#[macro_export]
macro_rules! msg_nearby {
    ($r:expr, $center:expr, $fmt:expr $(, $arg:expr)* $(; $($party:expr),+)?) => {{
        let __txt = format!($fmt $(, $arg)*);
        let __center: $crate::Location = $center;
        let __parties: &[$crate::Entity] = &[$($($party),+)?];
        $crate::send_message_nearby($r, __center, &__txt, __parties);
    }};
}
