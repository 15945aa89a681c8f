//! Text rendering of the game state.

use std::fmt::Write;

use engine::prelude::*;

/// Draw depth level `z` as seen by the player.
///
/// Cells in view show creatures and items, remembered cells only show the
/// terrain, unexplored cells are blank.
pub fn map(r: &Runtime, z: i32) -> String {
    let map = r.map();
    let mut ret = String::new();
    for y in 0..map.height() {
        let mut line = String::new();
        for x in 0..map.width() {
            let loc = ivec3(x, y, z);
            let c = if map.is_visible(loc) {
                if let Some(e) = r.entity_at(loc) {
                    e.glyph(r).ch
                } else if let Some(item) = map.items_at(loc).last() {
                    item.glyph(r).ch
                } else {
                    map.tile(loc).glyph().ch
                }
            } else if map.is_explored(loc) {
                map.tile(loc).glyph().ch
            } else {
                ' '
            };
            line.push(c);
        }
        let _ = writeln!(ret, "{}", line.trim_end());
    }
    ret
}

/// Player health, hunger and depth.
pub fn status(r: &Runtime, player: Entity) -> String {
    let mut ret = format!("HP: {}/{}", player.hp(r).max(0), player.max_hp(r));
    if player.has_capability(r, Capability::FoodConsumer) {
        let _ = write!(ret, " | {}", player.hunger_state(r));
    }
    if let Some(loc) = player.loc(r) {
        let _ = write!(ret, " | Dungeon level: {}", loc.z + 1);
    }
    ret
}

/// Map around the player, status line and unread messages.
pub fn screen(r: &Runtime) -> String {
    let Some(player) = r.player() else {
        return String::new();
    };
    let mut ret = String::new();
    if let Some(loc) = player.loc(r) {
        ret.push_str(&map(r, loc.z));
    }
    let _ = writeln!(ret, "{}", status(r, player));
    for m in player.messages(r) {
        let _ = writeln!(ret, "{m}");
    }
    ret
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn runtime(level: &str) -> Runtime {
        Runtime::new(
            Terrain::from_ascii(&[level]).unwrap(),
            Repository::builtin(),
            1,
        )
    }

    #[test]
    fn hidden_rooms() {
        let mut r = runtime(
            "
            #######
            #..#..#
            #######",
        );
        let player = r.spawn_player("player", ivec3(1, 1, 0)).unwrap();
        let apple = r.create_entity("apple").unwrap();
        r.add_item(apple, ivec3(2, 1, 0)).unwrap();
        let rock = r.create_entity("rock").unwrap();
        r.add_item(rock, ivec3(5, 1, 0)).unwrap();
        r.update_fov();

        assert_eq!(
            map(&r, 0),
            "\
####
#@%#
####
"
        );
        assert_eq!(
            status(&r, player),
            "HP: 40/40 | Not Hungry | Dungeon level: 1"
        );
    }

    #[test]
    fn remembered_terrain() {
        let mut r = Runtime::new(
            Terrain::from_ascii(&["#####\n#>..#\n#####", "#####\n#<..#\n#####"])
                .unwrap(),
            Repository::builtin(),
            1,
        );
        let player = r.spawn_player("player", ivec3(1, 1, 0)).unwrap();
        let fungus = r.create_entity("fungus").unwrap();
        r.add_entity(fungus, ivec3(3, 1, 0)).unwrap();
        r.update_fov();
        assert_eq!(map(&r, 0), "#####\n#@.F#\n#####\n");
        assert_eq!(map(&r, 1), "\n\n\n");

        // Out of view, only the terrain is remembered.
        assert!(r.command(Command::Move(IVec3::Z)));
        assert_eq!(player.loc(&r), Some(ivec3(1, 1, 1)));
        assert_eq!(map(&r, 0), "#####\n#>..#\n#####\n");
        assert_eq!(map(&r, 1), "#####\n#@..#\n#####\n");
        assert!(screen(&r).ends_with(
            "HP: 40/40 | Not Hungry | Dungeon level: 2\nYou descend to level 2!\n"
        ));
    }
}
