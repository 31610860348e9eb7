//! Condition codes reported in `weather[0].main` and the canned text attached
//! to each of them.

pub const UNRECOGNIZED_LABEL: &str = "Look out the window, I can't understand the weather there!";

pub const NO_SUGGESTIONS: &str =
    "I don't have any suggestions for this kind of weather. Look out the window and decide for yourself!";

const SUGGESTIONS_HEADER: &str = "Here are some suggestions for things to do today:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Other(String),
}

/// Four activities and a sign-off line for one kind of weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityList {
    pub activities: [&'static str; 4],
    pub closing: &'static str,
}

const SUNNY: ActivityList = ActivityList {
    activities: [
        "Visit a local park",
        "Have a picnic",
        "Go for a bike ride",
        "Take a walk on the beach",
    ],
    closing: "Enjoy the sunny day!",
};

const CLOUDY: ActivityList = ActivityList {
    activities: [
        "Explore a local museum",
        "Go shopping",
        "Read a book",
        "Watch a movie",
    ],
    closing: "Enjoy the cloudy day!",
};

const RAINY: ActivityList = ActivityList {
    activities: [
        "Visit a cozy cafe",
        "Try a new recipe at home",
        "Have a movie marathon",
        "Do some indoor exercises",
    ],
    closing: "Enjoy the rainy day!",
};

const STORMY: ActivityList = ActivityList {
    activities: [
        "Stay indoors and watch a movie",
        "Read a book",
        "Listen to music",
        "Do some indoor activities",
    ],
    closing: "Stay safe during the thunderstorm!",
};

const SNOWY: ActivityList = ActivityList {
    activities: [
        "Build a snowman",
        "Have a snowball fight",
        "Go skiing or snowboarding",
        "Enjoy a cup of hot chocolate",
    ],
    closing: "Have fun in the snow!",
};

const MISTY: ActivityList = ActivityList {
    activities: [
        "Go for a scenic drive",
        "Visit a local art gallery",
        "Have a warm drink at a cozy cafe",
        "Explore a botanical garden",
    ],
    closing: "Enjoy the misty day!",
};

impl Condition {
    /// Codes are matched exactly as the provider spells them.
    pub fn from_code(code: &str) -> Self {
        match code {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Thunderstorm" => Self::Thunderstorm,
            "Snow" => Self::Snow,
            "Mist" => Self::Mist,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Other(code) => code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear ☀️",
            Self::Clouds => "Cloudy ☁️",
            Self::Rain => "Rainy ☔️",
            Self::Drizzle => "Drizzle ☔️",
            Self::Thunderstorm => "Thunderstorm ⚡️",
            Self::Snow => "Snow ❄️",
            Self::Mist => "Mist 🌫️",
            Self::Other(_) => UNRECOGNIZED_LABEL,
        }
    }

    pub fn activities(&self) -> Option<&'static ActivityList> {
        match self {
            Self::Clear => Some(&SUNNY),
            Self::Clouds => Some(&CLOUDY),
            Self::Rain | Self::Drizzle => Some(&RAINY),
            Self::Thunderstorm => Some(&STORMY),
            Self::Snow => Some(&SNOWY),
            Self::Mist => Some(&MISTY),
            Self::Other(_) => None,
        }
    }

    /// Reply text for the suggestions command.
    pub fn suggestions(&self) -> String {
        match self.activities() {
            Some(list) => list.render(),
            None => NO_SUGGESTIONS.to_string(),
        }
    }
}

impl ActivityList {
    pub fn render(&self) -> String {
        let mut text = String::from(SUGGESTIONS_HEADER);
        for (i, activity) in self.activities.iter().enumerate() {
            text.push_str(&format!("\n{}. {}", i + 1, activity));
        }
        text.push('\n');
        text.push_str(self.closing);
        text
    }
}
