use std::fs;
use std::path::{Path, PathBuf};

/// Delimited catalog fixture covering song ids 1, 4, 5, 6 and 7.
pub const CATALOG_FIXTURE: &str = "\
1,South of the Border,Pop,No.6 Collaborations Project,Ed Sheeran,Ed Sheeran#Cardi B#Camila Cabello
4,Blinding Lights,Synth-pop,After Hours,The Weeknd,The Weeknd
5,Levitating,Disco,Future Nostalgia,Dua Lipa,Dua Lipa#DaBaby
6,Peaches,R&B,Justice,Justin Bieber,Justin Bieber#Daniel Caesar#Giveon
7,Save Your Tears,Synth-pop,After Hours,The Weeknd,The Weeknd#Ariana Grande
";

pub fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("songs.csv");
    fs::write(&path, CATALOG_FIXTURE).unwrap();
    path
}

pub fn write_script(dir: &Path, lines: &[String]) -> PathBuf {
    let path = dir.join("input.txt");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}
