//! Template packs shipped inside the binary.
//!
//! Each entry pairs a relative output path (which may itself contain
//! template variables) with the file's contents. Entries ending in `.j2`
//! are rendered; anything else is written out verbatim.

use crate::context::Lang;

pub struct BuiltinTemplate {
    pub rel_path: &'static str,
    pub contents: &'static str,
}

const RS_PACK: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        rel_path: "Cargo.toml.j2",
        contents: include_str!("../../templates/rs/Cargo.toml.j2"),
    },
    BuiltinTemplate {
        rel_path: "src/lib.rs.j2",
        contents: include_str!("../../templates/rs/src/lib.rs.j2"),
    },
    BuiltinTemplate {
        rel_path: "src/bin/{{ package_name }}.rs.j2",
        contents: include_str!("../../templates/rs/src/bin/main.rs.j2"),
    },
    BuiltinTemplate {
        rel_path: "benches/bench.rs.j2",
        contents: include_str!("../../templates/rs/benches/bench.rs.j2"),
    },
];

const TS_PACK: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        rel_path: "day.ts.j2",
        contents: include_str!("../../templates/ts/day.ts.j2"),
    },
    BuiltinTemplate {
        rel_path: "main.ts",
        contents: include_str!("../../templates/ts/main.ts"),
    },
    BuiltinTemplate {
        rel_path: "day.test.ts",
        contents: include_str!("../../templates/ts/day.test.ts"),
    },
    BuiltinTemplate {
        rel_path: "day.bench.ts",
        contents: include_str!("../../templates/ts/day.bench.ts"),
    },
];

const GO_PACK: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        rel_path: "main.go.j2",
        contents: include_str!("../../templates/go/main.go.j2"),
    },
    BuiltinTemplate {
        rel_path: "main_test.go",
        contents: include_str!("../../templates/go/main_test.go"),
    },
];

/// Returns the built-in template pack for a language.
pub fn pack(lang: Lang) -> &'static [BuiltinTemplate] {
    match lang {
        Lang::Rs => RS_PACK,
        Lang::Ts => TS_PACK,
        Lang::Go => GO_PACK,
    }
}
