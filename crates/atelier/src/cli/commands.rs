//! Command-line argument definitions.

use atelier_core::observability::LogFormat;
use atelier_core::{DEFAULT_EXPLORE_COUNT, Persona};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Outfit recommendations and illustrations from generative models
#[derive(Parser, Debug)]
#[command(name = "atelier", about, version)]
pub struct Cli {
    /// Provider configuration file (TOML); environment variables are used when omitted
    #[arg(short, long, global = true, env = "ATELIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log line format
    #[arg(long, value_enum, global = true, default_value_t = LogFormatArg::Human)]
    pub log_format: LogFormatArg,

    /// Write the decoded image here, for commands that produce one
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    /// Human-readable lines
    Human,
    /// One JSON object per line
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Human => LogFormat::Human,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Optional descriptors of the user or model.
#[derive(Args, Debug, Clone, Default)]
pub struct PersonaArgs {
    /// Gender, e.g. 女
    #[arg(long)]
    pub gender: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight_kg: Option<u32>,

    /// Height in centimetres
    #[arg(long)]
    pub height_cm: Option<u32>,

    /// Skin tone, e.g. 自然
    #[arg(long)]
    pub skin_tone: Option<String>,
}

impl PersonaArgs {
    /// Converts the flags into a persona; unset flags stay absent.
    pub fn to_persona(&self) -> Persona {
        let mut builder = Persona::builder();
        if let Some(gender) = &self.gender {
            builder.gender(gender.clone());
        }
        if let Some(age) = self.age {
            builder.age(age);
        }
        if let Some(weight_kg) = self.weight_kg {
            builder.weight_kg(weight_kg);
        }
        if let Some(height_cm) = self.height_cm {
            builder.height_cm(height_cm);
        }
        if let Some(skin_tone) = &self.skin_tone {
            builder.skin_tone(skin_tone.clone());
        }
        builder.build().unwrap_or_default()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Identify the attributes of a photographed garment
    Identify {
        /// Garment photo
        image: PathBuf,
    },

    /// Generate a display name from garment attributes
    Name {
        /// Attributes, e.g. 白色 棉布 连衣裙
        #[arg(required = true)]
        attributes: Vec<String>,
    },

    /// Identify and name a photographed garment
    Catalog {
        /// Garment photo
        image: PathBuf,

        /// Name used if generation fails; defaults to the photo's file name
        #[arg(long)]
        fallback_name: Option<String>,
    },

    /// Recommend an outfit from closet items
    Recommend {
        /// Mood keywords
        #[arg(long)]
        mood: String,

        /// Weather description
        #[arg(long)]
        weather: String,

        /// Closet item (repeatable)
        #[arg(long = "item", required = true)]
        items: Vec<String>,

        /// Creativity level, 1 to 10
        #[arg(long, default_value_t = 5)]
        creativity: i64,

        #[command(flatten)]
        persona: PersonaArgs,

        /// Also render the outfit when the model provides a caption
        #[arg(long)]
        with_image: bool,
    },

    /// Generate explorable fashion items
    ExploreItems {
        /// Number of items
        #[arg(long, default_value_t = DEFAULT_EXPLORE_COUNT)]
        count: u32,
    },

    /// Recommend a new outfit around selected explorable items
    Explore {
        /// Selected item name (repeatable)
        #[arg(long = "item", required = true)]
        items: Vec<String>,

        /// Mood keywords
        #[arg(long)]
        mood: String,

        /// Weather description
        #[arg(long)]
        weather: String,

        /// Creativity level, 1 to 10
        #[arg(long, default_value_t = 5)]
        creativity: i64,

        #[command(flatten)]
        persona: PersonaArgs,

        /// Also render the outfit
        #[arg(long)]
        with_image: bool,
    },

    /// Render an outfit description as an image
    Image {
        /// Garment-only outfit description
        description: String,

        /// Descriptors of the model wearing the outfit
        #[command(flatten)]
        model: PersonaArgs,
    },
}
