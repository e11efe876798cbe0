//! The Deutsches Java dictionary.
//!
//! Each entry lists the accepted spellings of one dialect word (umlaut/eszett spelling first,
//! ASCII digraph spelling second) and the Java token it becomes. Changing an entry changes the
//! meaning of existing `.dava` sources.

use serde::Serialize;

use crate::rules::RuleKind;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Entry {
    pub alternates: &'static [&'static str],
    pub replacement: &'static str,
    pub kind: RuleKind,
}

const fn word(alternates: &'static [&'static str], replacement: &'static str) -> Entry {
    Entry {
        alternates,
        replacement,
        kind: RuleKind::Word,
    }
}

const fn literal(alternates: &'static [&'static str], replacement: &'static str) -> Entry {
    Entry {
        alternates,
        replacement,
        kind: RuleKind::Literal,
    }
}

const fn call(alternates: &'static [&'static str], replacement: &'static str) -> Entry {
    Entry {
        alternates,
        replacement,
        kind: RuleKind::CallPrefix,
    }
}

pub static GENERAL: &[Entry] = &[
    // modifiers
    word(&["öffentlich", "oeffentlich"], "public"),
    word(&["privat"], "private"),
    word(&["geschützt", "geschuetzt"], "protected"),
    word(&["endgültig", "endgueltig"], "final"),
    word(&["fixiert", "fest"], "static"),
    word(&["abstrakt"], "abstract"),
    word(&["standard"], "default"),
    word(&["nativ"], "native"),
    // must precede `versiegelt`: `-` is a word boundary
    word(&["nicht-versiegelt"], "non-sealed"),
    word(&["versiegelt"], "sealed"),
    word(&["strengfk"], "strictfp"),
    word(&["veränderlich", "veraenderlich"], "volatile"),
    word(&["temporär", "temporaer"], "transient"),
    // data/oop
    word(&["importiere"], "import"),
    word(&["paket"], "package"),
    word(&["klasse"], "class"),
    word(&["aufzähl", "aufzaehl"], "enum"),
    word(&["schnittstelle"], "interface"),
    word(&["eintrag"], "record"),
    word(&["erweitert"], "extends"),
    word(&["implementiert"], "implements"),
    word(&["über", "ueber"], "super"),
    word(&["dieses"], "this"),
    // primitive types
    word(&["nichts"], "void"),
    word(&["ganz"], "int"),
    word(&["groß", "gross"], "long"),
    word(&["kurz"], "short"),
    word(&["fließ", "fliess"], "float"),
    word(&["doppel"], "double"),
    word(&["boolesche"], "boolean"),
    word(&["zeichen"], "char"),
    word(&["wahr"], "true"),
    word(&["falsch"], "false"),
    word(&["leer"], "null"),
    word(&["instanzvon"], "instanceof"),
    // control flow
    word(&["prüfe", "pruefe"], "assert"),
    word(&["falls"], "if"),
    word(&["ansonsten"], "else"),
    word(&["solange"], "while"),
    word(&["tue"], "do"),
    word(&["für", "fuer"], "for"),
    word(&["schalte"], "switch"),
    word(&["fall"], "case"),
    word(&["abbruch"], "break"),
    word(&["fortfahren"], "continue"),
    word(&["rückgabe"], "return"),
    word(&["versuche"], "try"),
    word(&["fange"], "catch"),
    word(&["schließlich", "schliesslich"], "finally"),
    word(&["werfe"], "throw"),
    word(&["wirft"], "throws"),
    word(&["synchronisiert"], "synchronized"),
    // java.lang types
    word(&["Objekt"], "Object"),
    word(&["Textkette"], "String"),
    word(&["Ganzzahl"], "Integer"),
    word(&["Großganzzahl", "Grossganzzahl"], "Long"),
    word(&["Kurzganzzahl"], "Short"),
    word(&["Fließkommazahl", "Fliesskommazahl"], "Float"),
    word(&["Doppelkommazahl"], "Double"),
    word(&["Boolesche"], "Boolean"),
    word(&["Zeichen"], "Character"),
    // call idioms
    word(&["System.aus"], "System.out"),
    literal(&[".drucke("], ".print("),
    call(&["haupt"], "main("),
    literal(&[".druckezl("], ".println("),
];

/// Only applied to `module-info.java` outputs.
pub static MODULE: &[Entry] = &[
    word(&["exportiert"], "exports"),
    word(&["modul"], "module"),
    word(&["offenes"], "open"),
    word(&["öffnet", "oeffnet"], "opens"),
    word(&["versorgt"], "provides"),
    word(&["benötigt", "benoetigt"], "requires"),
    word(&["benutzt"], "uses"),
    word(&["mit"], "with"),
    word(&["zu"], "to"),
    word(&["transitiv"], "transitive"),
];

#[derive(Serialize)]
struct Dump {
    general: &'static [Entry],
    module: &'static [Entry],
}

/// Both tables as pretty JSON, in application order.
pub fn to_json_pretty() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&Dump {
        general: GENERAL,
        module: MODULE,
    })?)
}
