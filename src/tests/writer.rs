use super::{ClipWriter, NoteWriter};
use crate::config::Config;
use crate::entry::ClipEntry;
use crate::error::ClipError;
use crate::merge::InsertPolicy;
use crate::section;
use crate::storage::{FsVault, MemoryVault, Vault};
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn config() -> Config {
    Config {
        storage_folder: "Clippings".to_string(),
        date_format: "%Y-%m-%d".to_string(),
        time_format: "%H:%M".to_string(),
        heading: String::new(),
        heading_level: 2,
        position: "append".to_string(),
        include_description: true,
        include_comments: true,
        highlight_style: "callout".to_string(),
    }
}

fn clip(title: &str) -> ClipEntry {
    ClipEntry {
        title: title.to_string(),
        url: "https://example.com/post".to_string(),
        highlighted_content: None,
        comments: None,
        description: None,
    }
}

#[test]
fn first_clip_creates_site_file_with_title_heading() {
    let mut vault = MemoryVault::new();
    let cfg = config();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    let reference = writer
        .clip_at("www.example.com", &clip("First"), at(2024, 1, 2, 10, 30))
        .unwrap();

    assert_eq!(reference, "![[Clippings/example-com#10-30|example-com-1]]");
    let text = vault.text("Clippings/example-com.md").unwrap();
    assert_eq!(
        text,
        "# example.com\n\n## 2024-01-02\n\n### 10-30\n\
         - [ ] [**First**](https://example.com/post) [^1]\n\n\
         [^1]: https://example.com/post\n"
    );
}

#[test]
fn sequential_clips_number_footnotes_without_gaps() {
    let mut vault = MemoryVault::new();
    let cfg = config();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    for (i, minute) in [30, 40, 50].iter().enumerate() {
        let reference = writer
            .clip_at("example.com", &clip("Entry"), at(2024, 1, 2, 10, *minute))
            .unwrap();
        let label = format!("example-com-{}", i + 1);
        assert!(reference.ends_with(&format!("|{label}]]")), "{reference}");
    }

    let text = vault.text("Clippings/example-com.md").unwrap();
    for footnote in ["[^1]:", "[^2]:", "[^3]:"] {
        assert!(text.contains(footnote), "missing {footnote} in:\n{text}");
    }
    assert!(!text.contains("[^4]"));
}

#[test]
fn same_day_clips_share_one_date_group() {
    let mut vault = MemoryVault::new();
    let cfg = config();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    writer
        .clip_at("example.com", &clip("A"), at(2024, 1, 2, 10, 30))
        .unwrap();
    writer
        .clip_at("example.com", &clip("B"), at(2024, 1, 2, 11, 0))
        .unwrap();

    let text = vault.text("Clippings/example-com.md").unwrap();
    assert_eq!(text.matches("## 2024-01-02").count(), 1);
    assert!(text.contains("### 10-30"));
    assert!(text.contains("### 11-00"));
}

#[test]
fn day_rollover_opens_a_new_date_group() {
    let mut vault = MemoryVault::new();
    let cfg = config();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    writer
        .clip_at("example.com", &clip("A"), at(2024, 1, 1, 23, 50))
        .unwrap();
    writer
        .clip_at("example.com", &clip("B"), at(2024, 1, 2, 0, 10))
        .unwrap();

    let text = vault.text("Clippings/example-com.md").unwrap();
    assert_eq!(text.matches("## 2024-01-01").count(), 1);
    assert_eq!(text.matches("## 2024-01-02").count(), 1);
    // Newest date group sits below the older one.
    let first = text.find("## 2024-01-01").unwrap();
    let second = text.find("## 2024-01-02").unwrap();
    assert!(first < second);
}

#[test]
fn topic_note_entry_lands_inside_target_section() {
    let mut vault = MemoryVault::new();
    vault.seed("topic.md", "# Notes\n\n## Clippings\n\n## Other\nstuff\n");
    let cfg = config();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    writer
        .clip_to_note_at("topic.md", &clip("First"), Some("Clippings"), at(2024, 1, 2, 10, 30))
        .unwrap();

    let text = vault.text("topic.md").unwrap().to_string();
    assert_eq!(
        text,
        "# Notes\n\n## Clippings\n\n### 10-30\n\
         - [ ] [**First**](https://example.com/post) [^1]\n\n\
         [^1]: https://example.com/post\n## Other\nstuff\n"
    );

    // Round trip: locating the section in the output recovers the entry.
    let index = crate::markdown::heading_index(&text);
    let bounds = section::locate(&index, "Clippings", 2).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    let slice = &lines[bounds.first_line..bounds.last_line.unwrap()];
    assert!(slice.contains(&"### 10-30"));
    assert!(slice.iter().any(|line| line.contains("[**First**]")));
}

#[test]
fn missing_heading_is_created_at_top_of_body() {
    let mut vault = MemoryVault::new();
    vault.seed("topic.md", "---\ntitle: x\n---\n# Notes\nbody\n");
    let cfg = config();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    writer
        .clip_to_note_at("topic.md", &clip("First"), Some("Clippings"), at(2024, 1, 2, 10, 30))
        .unwrap();

    let text = vault.text("topic.md").unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[2], "---");
    assert_eq!(lines[3], "## Clippings");
    assert!(text.ends_with("# Notes\nbody\n"));
}

#[test]
fn no_heading_prepend_inserts_after_frontmatter() {
    let mut vault = MemoryVault::new();
    vault.seed("x.md", "---\ntitle: x\n---\n# Notes\n");

    NoteWriter::new(&mut vault)
        .write("x.md", "- [ ] **Read later**", None, 0, InsertPolicy::Prepend)
        .unwrap();

    assert_eq!(
        vault.text("x.md").unwrap(),
        "---\ntitle: x\n---\n- [ ] **Read later**\n# Notes\n"
    );
}

#[test]
fn missing_note_is_created_with_parent_folder() {
    let mut vault = MemoryVault::new();
    let cfg = config();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    writer
        .clip_to_note_at("inbox/new.md", &clip("First"), None, at(2024, 1, 2, 10, 30))
        .unwrap();

    let text = vault.text("inbox/new.md").unwrap();
    assert!(text.starts_with("## 2024-01-02\n\n### 10-30\n"));
    assert!(text.ends_with("[^1]: https://example.com/post\n"));
}

#[test]
fn ambiguous_date_format_aborts_the_clip() {
    let mut vault = MemoryVault::new();
    let mut cfg = config();
    cfg.date_format = "%A".to_string();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    let err = writer
        .clip_at("example.com", &clip("A"), at(2024, 1, 2, 10, 30))
        .unwrap_err();
    assert!(matches!(err, ClipError::AmbiguousDateComparison { .. }));
    assert!(!vault.path_exists("Clippings/example-com.md"));
}

#[test]
fn repeated_topic_insertions_keep_section_tidy() {
    let mut vault = MemoryVault::new();
    vault.seed("topic.md", "# Notes\n\n## Clippings\n\n## Other\n");
    let cfg = config();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    writer
        .clip_to_note_at("topic.md", &clip("A"), Some("Clippings"), at(2024, 1, 2, 10, 30))
        .unwrap();
    writer
        .clip_to_note_at("topic.md", &clip("B"), Some("Clippings"), at(2024, 1, 2, 11, 0))
        .unwrap();

    let text = vault.text("topic.md").unwrap();
    assert!(text.contains("[^1]"));
    assert!(text.contains("[^2]"));
    assert_eq!(text.matches("## Clippings").count(), 1);
    let a = text.find("### 10-30").unwrap();
    let b = text.find("### 11-00").unwrap();
    let other = text.find("## Other").unwrap();
    assert!(a < b && b < other);
}

#[test]
fn clips_persist_through_a_real_directory() {
    let dir = TempDir::new().unwrap();
    let mut vault = FsVault::new(dir.path());
    let cfg = config();
    let mut writer = ClipWriter::new(&mut vault, &cfg);

    writer
        .clip_at("www.example.com", &clip("A"), at(2024, 1, 2, 10, 30))
        .unwrap();
    writer
        .clip_at("www.example.com", &clip("B"), at(2024, 1, 2, 11, 0))
        .unwrap();

    let on_disk =
        std::fs::read_to_string(dir.path().join("Clippings").join("example-com.md")).unwrap();
    assert!(on_disk.starts_with("# example.com\n"));
    assert!(on_disk.contains("[^2]:"));
}
