// crates/cli/src/presentation.rs
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use comfy_table::{Cell, CellAlignment, Table, presets};
use serde::Serialize;
use serde_json::{Map, Value};
use text_stats_core::{ReadingTimeEstimator, StatisticsReport, WordFrequency};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::options::{OutputFormat, Statistic};
use crate::runner::TextEntry;
use crate::settings::{DisplaySettings, DisplayedStats};

const TOTAL_LABEL: &str = "TOTAL";

pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

/// Renders all entries in the configured format.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render(entries: &[TextEntry], config: &Config) -> Result<String> {
    let view = View::new(entries, config);
    match config.format {
        OutputFormat::Table => view.table(),
        OutputFormat::Csv => view.separated(','),
        OutputFormat::Tsv => view.separated('\t'),
        OutputFormat::Md => view.markdown(),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&view.records())?)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&view.records())?),
        OutputFormat::Jsonl => view.json_lines(),
    }
}

/// Writes rendered output to `path`, or to stdout when no path is given.
///
/// # Errors
///
/// Returns an error when the file or stdout cannot be written.
pub fn emit(rendered: &str, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, rendered).map_err(|source| AppError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("wrote output to {}", path.display());
        return Ok(());
    }
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// One JSON/YAML record: the full report of an input.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportRecord<'a> {
    source: &'a str,
    #[serde(flatten)]
    report: &'a StatisticsReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    common_words: Option<&'a [WordFrequency]>,
}

struct View<'a> {
    entries: &'a [TextEntry],
    rows: Vec<DisplayedStats>,
    settings: &'a DisplaySettings,
    columns: Vec<Statistic>,
    estimator: ReadingTimeEstimator,
    total_row: bool,
}

impl<'a> View<'a> {
    fn new(entries: &'a [TextEntry], config: &'a Config) -> Self {
        let settings = &config.display;
        Self {
            entries,
            rows: entries.iter().map(|e| settings.resolve(&e.report)).collect(),
            settings,
            columns: settings.columns(),
            estimator: ReadingTimeEstimator::new(config.engine.words_per_minute),
            total_row: config.total_row,
        }
    }

    fn show_common_words(&self) -> bool {
        self.settings.shows(Statistic::CommonWords)
    }

    /// Column sums; the reading time is estimated again from the summed word count.
    fn total(&self) -> DisplayedStats {
        DisplayedStats {
            words: self.rows.iter().map(|r| r.words).sum(),
            characters: self.rows.iter().map(|r| r.characters).sum(),
            special_characters: self.rows.iter().map(|r| r.special_characters).sum(),
            sentences: self.rows.iter().map(|r| r.sentences).sum(),
            paragraphs: self.rows.iter().map(|r| r.paragraphs).sum(),
            reading_time: self
                .estimator
                .estimate(self.entries.iter().map(|e| e.report.words.value()).sum()),
        }
    }

    fn records(&self) -> Vec<ReportRecord<'a>> {
        let with_words = self.show_common_words();
        self.entries
            .iter()
            .map(|e| ReportRecord {
                source: &e.source,
                report: &e.report,
                common_words: e.common_words.as_deref().filter(|_| with_words),
            })
            .collect()
    }

    fn table(&self) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "text_stats v{}", crate::VERSION)?;
        writeln!(out)?;

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_header(
            std::iter::once("Source")
                .chain(self.columns.iter().map(|c| c.label()))
                .map(Cell::new),
        );
        for (entry, row) in self.entries.iter().zip(&self.rows) {
            table.add_row(self.table_row(&entry.source, row));
        }
        if self.entries.len() > 1 {
            let label = format!("{TOTAL_LABEL} ({} inputs)", self.entries.len());
            table.add_row(self.table_row(&label, &self.total()));
        }
        writeln!(out, "{table}")?;

        if self.show_common_words() {
            for entry in self.entries {
                let Some(words) = &entry.common_words else { continue };
                writeln!(out)?;
                writeln!(out, "Common words ({}):", entry.source)?;
                if words.is_empty() {
                    writeln!(out, "  (none)")?;
                }
                for w in words {
                    writeln!(out, "  {:<24}{:>6}", w.word, w.count)?;
                }
            }
        }
        Ok(out)
    }

    fn table_row(&self, source: &str, row: &DisplayedStats) -> Vec<Cell> {
        std::iter::once(Cell::new(source))
            .chain(
                self.columns
                    .iter()
                    .map(|&c| Cell::new(row.cell(c)).set_alignment(CellAlignment::Right)),
            )
            .collect()
    }

    fn separated(&self, delimiter: char) -> Result<String> {
        let field = |value: &str| escape_field(value, delimiter);
        let separator = delimiter.to_string();
        let mut out = String::new();

        let header: Vec<&str> = std::iter::once("source")
            .chain(self.columns.iter().map(|c| c.key()))
            .collect();
        writeln!(out, "{}", header.join(separator.as_str()))?;

        let mut write_row = |source: &str, row: &DisplayedStats| -> std::fmt::Result {
            let cells: Vec<String> = std::iter::once(field(source))
                .chain(self.columns.iter().map(|&c| field(&row.cell(c))))
                .collect();
            writeln!(out, "{}", cells.join(separator.as_str()))
        };
        for (entry, row) in self.entries.iter().zip(&self.rows) {
            write_row(&entry.source, row)?;
        }
        if self.total_row {
            write_row(TOTAL_LABEL, &self.total())?;
        }
        Ok(out)
    }

    fn markdown(&self) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "### Text Statistics")?;
        writeln!(out)?;

        let mut header = String::from("| Source |");
        let mut separator = String::from("|:---|");
        for column in &self.columns {
            write!(header, " {} |", column.label())?;
            separator.push_str("---:|");
        }
        writeln!(out, "{header}")?;
        writeln!(out, "{separator}")?;

        let mut write_row = |source: &str, row: &DisplayedStats| -> std::fmt::Result {
            let mut line = format!("| {} |", source.replace('|', "\\|"));
            for &column in &self.columns {
                write!(line, " {} |", row.cell(column))?;
            }
            writeln!(out, "{line}")
        };
        for (entry, row) in self.entries.iter().zip(&self.rows) {
            write_row(&entry.source, row)?;
        }
        if self.total_row {
            write_row(&format!("**{TOTAL_LABEL}**"), &self.total())?;
        }

        if self.show_common_words() {
            for entry in self.entries {
                let Some(words) = &entry.common_words else { continue };
                writeln!(out)?;
                writeln!(out, "#### Common words: {}", entry.source.replace('|', "\\|"))?;
                writeln!(out)?;
                for w in words {
                    writeln!(out, "- {} ({})", w.word, w.count)?;
                }
            }
        }
        Ok(out)
    }

    fn json_lines(&self) -> Result<String> {
        let mut out = String::new();
        for (entry, row) in self.entries.iter().zip(&self.rows) {
            let mut object = Map::new();
            object.insert("type".to_string(), "file".into());
            object.insert("source".to_string(), entry.source.clone().into());
            if let Value::Object(fields) = serde_json::to_value(row)? {
                object.extend(fields);
            }
            if let Some(words) = entry.common_words.as_ref().filter(|_| self.show_common_words()) {
                object.insert("commonWords".to_string(), serde_json::to_value(words)?);
            }
            writeln!(out, "{}", Value::Object(object))?;
        }

        let total = self.total();
        let total_obj = serde_json::json!({
            "type": "total",
            "version": crate::VERSION,
            "inputs": self.entries.len(),
            "words": total.words,
            "characters": total.characters,
            "specialCharacters": total.special_characters,
            "sentences": total.sentences,
            "paragraphs": total.paragraphs,
            "readingTime": total.reading_time,
        });
        writeln!(out, "{total_obj}")?;
        Ok(out)
    }
}

fn escape_field(value: &str, delimiter: char) -> String {
    if delimiter == ',' {
        if value.contains([',', '"', '\n']) {
            return format!("\"{}\"", value.replace('"', "\"\""));
        }
        return value.to_string();
    }
    value.replace(['\t', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::options::Inclusion;
    use text_stats_core::{Counter, common_words};

    fn entry(source: &str, text: &str) -> TextEntry {
        TextEntry {
            source: source.to_string(),
            report: Counter::default().compute(text),
            common_words: Some(common_words(text, 10)),
        }
    }

    fn config(format: OutputFormat) -> Config {
        ConfigBuilder::default().format(format).build().unwrap()
    }

    #[test]
    fn csv_quotes_sources_and_appends_total() {
        let entries = [entry("a,b.txt", "Hello world"), entry("c.txt", "One. Two.")];
        let mut config = config(OutputFormat::Csv);
        config.total_row = true;
        let out = render(&entries, &config).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "source,words,characters,special_characters,sentences,paragraphs,reading_time"
        );
        assert!(lines[1].starts_with("\"a,b.txt\",2,11,1,1,1,"));
        assert!(lines[3].starts_with("TOTAL,4,"));
    }

    #[test]
    fn tsv_uses_selected_variant() {
        let entries = [entry("x", "<p>Hi you</p>")];
        let mut config = config(OutputFormat::Tsv);
        config.display = DisplaySettings {
            statistics: vec![Statistic::Characters],
            spaces: Inclusion::Exclude,
            markup: Inclusion::Exclude,
        };
        let out = render(&entries, &config).unwrap();
        assert_eq!(out, "source\twords\tcharacters\nx\t2\t5\n");
    }

    #[test]
    fn table_has_total_row_for_several_inputs() {
        let entries = [entry("a", "one two"), entry("b", "three")];
        let out = render(&entries, &config(OutputFormat::Table)).unwrap();
        assert!(out.contains("Reading time"));
        assert!(out.contains("TOTAL (2 inputs)"));

        let single = render(&entries[..1], &config(OutputFormat::Table)).unwrap();
        assert!(!single.contains("TOTAL"));
    }

    #[test]
    fn json_contains_full_report() {
        let entries = [entry("a", "Hello world")];
        let out = render(&entries, &config(OutputFormat::Json)).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["source"], "a");
        assert_eq!(value[0]["charactersExcludingSpaces"], 10);
        assert_eq!(value[0]["readingTime"], "< 1 second");
        assert!(value[0].get("commonWords").is_none());
    }

    #[test]
    fn jsonl_ends_with_total_object() {
        let entries = [entry("a", "one two"), entry("b", "three")];
        let out = render(&entries, &config(OutputFormat::Jsonl)).unwrap();
        let last: Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(last["type"], "total");
        assert_eq!(last["inputs"], 2);
        assert_eq!(last["words"], 3);
        let first: Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
        assert_eq!(first["type"], "file");
        assert_eq!(first["specialCharacters"], 1);
    }

    #[test]
    fn markdown_lists_common_words_when_shown() {
        let entries = [entry("doc|1", "the cat saw the dog")];
        let mut config = config(OutputFormat::Md);
        config.display.statistics.push(Statistic::CommonWords);
        let out = render(&entries, &config).unwrap();
        assert!(out.contains("| doc\\|1 |"));
        assert!(out.contains("- the (2)"));
    }
}
