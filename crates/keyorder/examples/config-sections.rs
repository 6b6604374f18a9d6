// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An example demonstrating `KeyOrderMap` as the section list of an INI-style
//! configuration file, where both lookups by name and the order sections are
//! written out in matter.

use keyorder::{KeyOrderItem, KeyOrderMap};
use std::{fmt::Write, ops::ControlFlow};

/// A named section with its `key = value` lines.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str, entries: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_owned(),
            entries: entries
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }
}

impl KeyOrderItem for Section {
    type Key<'a> = &'a str;

    fn key(&self) -> Self::Key<'_> {
        &self.name
    }
}

fn render(config: &KeyOrderMap<Section>) -> String {
    let mut out = String::new();
    for section in config {
        writeln!(out, "[{}]", section.name).unwrap();
        for (key, value) in &section.entries {
            writeln!(out, "{key} = {value}").unwrap();
        }
    }
    out
}

fn main() {
    let mut config = KeyOrderMap::new();
    config
        .insert_unique(Section::new("server", &[("port", "8080")]))
        .unwrap();
    config
        .insert_unique(Section::new("logging", &[("level", "info")]))
        .unwrap();

    // A second "server" section is rejected.
    let err = config
        .insert_unique(Section::new("server", &[("port", "9090")]))
        .unwrap_err();
    println!("rejected: {err}");

    // Put the database section between server and logging.
    config
        .insert_unique_at(1, Section::new("database", &[("url", "db:5432")]))
        .unwrap();

    // Replace a section in place: it keeps its position.
    config
        .update(Section::new("logging", &[("level", "debug")]))
        .unwrap();

    // Lookups by name.
    let port = &config.get("server").unwrap().entries[0].1;
    println!("server port: {port}");

    print!("{}", render(&config));

    // Find the first section missing a required setting.
    let flow = config.visit(|_, section| {
        if section.entries.iter().any(|(k, _)| k == "level") {
            ControlFlow::Break("has a log level")
        } else {
            ControlFlow::Continue(())
        }
    });
    if let ControlFlow::Break(stopped) = flow {
        println!(
            "section {} at position {} {}",
            stopped.key(),
            stopped.index(),
            stopped.value()
        );
    }

    // Move logging to the front and drop the database section.
    let logging = config.get_index_of("logging").unwrap();
    config.move_index(logging, 0);
    config.shift_remove("database").unwrap();
    print!("{}", render(&config));
}
