use super::Song;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

/// Reads a whole catalog file into Song records.
///
/// Two on-disk layouts are understood: a `.json` file holding an array of
/// songs, and delimited rows of the form
/// `id,title,genre,album,owner,collab1#collab2`.
pub fn load_songs<P: AsRef<Path>>(path: P) -> Result<Vec<Song>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read catalog file {}", path.display()))?;

    let songs = if path.extension().map(|ext| ext == "json").unwrap_or(false) {
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON catalog in {}", path.display()))?
    } else {
        parse_delimited_rows(&text)
            .with_context(|| format!("Invalid catalog row in {}", path.display()))?
    };

    info!("Loaded {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

fn parse_delimited_rows(text: &str) -> Result<Vec<Song>> {
    let mut songs = Vec::new();
    for (line_number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        songs.push(parse_row(line).with_context(|| format!("line {}", line_number + 1))?);
    }
    Ok(songs)
}

// The collaborator column is itself a list, split on `#` or `|`.
fn parse_row(line: &str) -> Result<Song> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 6 {
        bail!("expected 6 fields, got {}", fields.len());
    }
    let id = fields[0]
        .parse::<u32>()
        .with_context(|| format!("invalid song id \"{}\"", fields[0]))?;
    let collaborators = fields[5]
        .split(['#', '|'])
        .filter(|collaborator| !collaborator.is_empty())
        .map(str::to_owned)
        .collect();
    Ok(Song {
        id,
        title: fields[1].to_owned(),
        genre: fields[2].to_owned(),
        album: fields[3].to_owned(),
        owner: fields[4].to_owned(),
        collaborators,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_delimited_row() {
        let song = parse_row("7,Shape of You,Pop,Divide,Ed Sheeran,Ed Sheeran#Stormzy").unwrap();

        assert_eq!(song.id, 7);
        assert_eq!(song.title, "Shape of You");
        assert_eq!(song.genre, "Pop");
        assert_eq!(song.album, "Divide");
        assert_eq!(song.owner, "Ed Sheeran");
        assert_eq!(song.collaborators, vec!["Ed Sheeran", "Stormzy"]);
    }

    #[test]
    fn pipe_delimited_collaborators_are_accepted() {
        let song =
            parse_row("2,Havana,Pop,Camila,Camila Cabello,Camila Cabello|Young Thug").unwrap();

        assert_eq!(song.collaborators, vec!["Camila Cabello", "Young Thug"]);
    }

    #[test]
    fn short_rows_are_rejected() {
        assert!(parse_row("1,OnlyTitle,Pop").is_err());
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(parse_row("one,Title,Pop,Album,Owner,Owner").is_err());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let songs = parse_delimited_rows("1,A,Pop,X,O,O\n\n2,B,Pop,Y,O,O\n").unwrap();

        assert_eq!(songs.len(), 2);
    }

    #[test]
    fn loads_a_json_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"title":"A","genre":"Pop","album":"X","owner":"O","collaborators":["O"]}]"#,
        )
        .unwrap();

        let songs = load_songs(&path).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "A");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_songs(dir.path().join("nope.csv")).is_err());
    }
}
