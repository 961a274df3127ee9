// crates/cli/src/args.rs
use crate::options::{Inclusion, LengthUnitArg, OutputFormat, Statistic};
use crate::parsers;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "text_stats",
    version,
    about = "テキスト統計ツール (単語数/文字数/特殊文字数/文数/段落数/読了時間)"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub counting: CountingOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    #[command(flatten)]
    pub comparison: ComparisonOptions,

    /// 集計するテキスト（ファイルの代わりに直接指定）
    #[arg(long, help_heading = "入力")]
    pub text: Option<String>,

    /// 対象ファイル（`-` は標準入力、省略時も標準入力）
    #[arg(value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 表示する統計項目（カンマ区切り, 単語数は常に表示）
    #[arg(long, value_enum, value_delimiter = ',', help_heading = "出力")]
    pub show: Option<Vec<Statistic>>,

    /// 空白を表示値に含めるか
    #[arg(long, value_enum, help_heading = "出力")]
    pub spaces: Option<Inclusion>,

    /// マークアップタグを表示値に含めるか
    #[arg(long, value_enum, help_heading = "出力")]
    pub markup: Option<Inclusion>,

    /// 頻出語の表示件数
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "出力")]
    pub common_words_limit: Option<usize>,

    /// CSV/TSV/Markdown 末尾に TOTAL 行を出力
    #[arg(long, help_heading = "出力")]
    pub total_row: bool,

    /// 出力先ファイル
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// 表示値のスナップショットを JSON で保存
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub save: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct CountingOptions {
    /// 除去するマークアップタグ名（カンマ区切り, 既定は HTML 要素名）
    #[arg(long, value_delimiter = ',', value_parser = parsers::parse_tag_name, help_heading = "計測")]
    pub tags: Option<Vec<String>>,

    /// 1分あたりの読了単語数
    #[arg(long, value_parser = parsers::parse_words_per_minute, help_heading = "計測")]
    pub wpm: Option<u32>,

    /// 文字数の単位
    #[arg(long, value_enum, help_heading = "計測")]
    pub length_unit: Option<LengthUnitArg>,

    /// 設定ファイル (YAML / JSON)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "計測")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 読み込みエラーが1件でもあれば失敗として終了
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ファイル変更を監視して再集計
    #[arg(long, help_heading = "動作")]
    pub watch: bool,

    /// 監視時のデバウンス間隔（秒）
    #[arg(long, requires = "watch", value_parser = parsers::parse_positive_u64, help_heading = "動作")]
    pub watch_interval: Option<u64>,

    /// ログを詳細に出力 (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}

#[derive(ClapArgs, Debug)]
pub struct ComparisonOptions {
    /// 2つのスナップショットを比較
    #[arg(long, num_args = 2, value_names = ["OLD", "NEW"], value_hint = ValueHint::FilePath, help_heading = "比較")]
    pub compare: Option<Vec<PathBuf>>,
}
