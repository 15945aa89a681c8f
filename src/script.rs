//! Player commands given as words on the command line.

use anyhow::{bail, Context, Result};
use engine::prelude::*;

/// Parse a command word.
///
/// Directions are `n`, `s`, `e`, `w` (or vi-keys `k`, `j`, `l`, `h`), stairs
/// are `>` and `<`, `.` waits. Item commands take an inventory slot after a
/// colon, `eat:0`. Pickup without indices, `g`, means everything on the
/// floor, `g:0,2` picks specific items.
pub fn parse(word: &str) -> Result<Command> {
    let (verb, arg) = match word.split_once(':') {
        Some((verb, arg)) => (verb, Some(arg)),
        None => (word, None),
    };

    let slot = || -> Result<usize> {
        let arg = arg.with_context(|| format!("{verb}: missing slot"))?;
        arg.parse()
            .with_context(|| format!("{verb}: bad slot {arg:?}"))
    };

    let cmd = match verb {
        "n" | "k" => Command::Move(IVec3::NEG_Y),
        "s" | "j" => Command::Move(IVec3::Y),
        "e" | "l" => Command::Move(IVec3::X),
        "w" | "h" => Command::Move(IVec3::NEG_X),
        ">" => Command::Move(IVec3::Z),
        "<" => Command::Move(IVec3::NEG_Z),
        "." | "wait" => Command::Wait,
        "g" | "pickup" => {
            let indices = match arg {
                Some(arg) => arg
                    .split(',')
                    .map(|i| {
                        i.trim().parse().with_context(|| {
                            format!("{verb}: bad index {i:?}")
                        })
                    })
                    .collect::<Result<Vec<usize>>>()?,
                None => Vec::new(),
            };
            Command::Pickup(indices)
        }
        "d" | "drop" => Command::Drop(slot()?),
        "E" | "eat" => Command::Eat(slot()?),
        "wield" => Command::Wield(slot()?),
        "unwield" => Command::Unwield,
        "W" | "wear" => Command::Wear(slot()?),
        "T" | "takeoff" => Command::TakeOff,
        _ => bail!("unknown command {word:?}"),
    };
    Ok(cmd)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_words() {
        assert_eq!(parse("n").unwrap(), Command::Move(ivec3(0, -1, 0)));
        assert_eq!(parse("l").unwrap(), Command::Move(ivec3(1, 0, 0)));
        assert_eq!(parse(">").unwrap(), Command::Move(ivec3(0, 0, 1)));
        assert_eq!(parse(".").unwrap(), Command::Wait);
        assert_eq!(parse("g").unwrap(), Command::Pickup(vec![]));
        assert_eq!(parse("g:0, 2").unwrap(), Command::Pickup(vec![0, 2]));
        assert_eq!(parse("eat:3").unwrap(), Command::Eat(3));
        assert_eq!(parse("T").unwrap(), Command::TakeOff);

        assert!(parse("eat").is_err());
        assert!(parse("drop:x").is_err());
        assert!(parse("fly").is_err());
    }
}
