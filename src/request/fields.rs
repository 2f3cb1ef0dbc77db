//! Closed value sets used by the per-category request fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a closed set of string values with its wire spelling, a
/// default, and a clap value parser.
macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                #[value(name = $value)]
                $variant,
            )+
        }

        #[allow(dead_code)]
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Human form of the wire value: underscores become spaces.
            pub fn label(&self) -> String {
                self.as_str().replace('_', " ")
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice! {
    Gender default Any {
        Any => "any",
        Male => "male",
        Female => "female",
    }
}

choice! {
    TravelStyle default Comfortable {
        Luxury => "luxury",
        Comfortable => "comfortable",
        Budget => "budget",
        Backpacking => "backpacking",
    }
}

choice! {
    WorkSchedule default NineToFive {
        NineToFive => "9-5",
        Flexible => "flexible",
        NightShift => "night_shift",
        Student => "student",
    }
}

choice! {
    Cleanliness default Clean {
        VeryClean => "very_clean",
        Clean => "clean",
        Relaxed => "relaxed",
    }
}

choice! {
    Lifestyle default Quiet {
        Quiet => "quiet",
        Social => "social",
        Party => "party",
    }
}

choice! {
    LeaseDuration default OneYear {
        ThreeMonths => "3_months",
        SixMonths => "6_months",
        OneYear => "1_year",
        Flexible => "flexible",
    }
}

choice! {
    BusinessType default TechStartup {
        TechStartup => "tech_startup",
        Ecommerce => "ecommerce",
        ServiceBusiness => "service_business",
        Creative => "creative",
        Consulting => "consulting",
        Other => "other",
    }
}

choice! {
    BusinessStage default Idea {
        Idea => "idea",
        Prototype => "prototype",
        Mvp => "mvp",
        EarlyRevenue => "early_revenue",
        Scaling => "scaling",
    }
}

choice! {
    CommitmentLevel default FullTime {
        PartTime => "part_time",
        FullTime => "full_time",
        WeekendsOnly => "weekends_only",
    }
}

choice! {
    InvestmentRange default UpTo1k {
        UpTo1k => "0-1k",
        From1kTo10k => "1k-10k",
        From10kTo50k => "10k-50k",
        Over50k => "50k+",
    }
}

choice! {
    Timeline default ThreeMonths {
        Immediate => "immediate",
        OneMonth => "1_month",
        ThreeMonths => "3_months",
        SixMonths => "6_months",
    }
}

choice! {
    RelationshipType default Dating {
        Casual => "casual",
        Dating => "dating",
        Serious => "serious",
        FriendshipFirst => "friendship_first",
    }
}

choice! {
    DateActivity default Coffee {
        Coffee => "coffee",
        Dinner => "dinner",
        Movie => "movie",
        Outdoor => "outdoor",
        Cultural => "cultural",
        Adventure => "adventure",
    }
}

choice! {
    PersonalityPreference default NoPreference {
        NoPreference => "no_preference",
        Outgoing => "outgoing",
        Introverted => "introverted",
        Balanced => "balanced",
    }
}

choice! {
    ActivityType default Coffee {
        Dinner => "dinner",
        Shopping => "shopping",
        Movie => "movie",
        Sports => "sports",
        LongDrive => "long_drive",
        Gaming => "gaming",
        Coffee => "coffee",
        Hiking => "hiking",
    }
}

choice! {
    TimeOfDay default Evening {
        Morning => "morning",
        Afternoon => "afternoon",
        Evening => "evening",
        Night => "night",
    }
}

choice! {
    BudgetRange default Moderate {
        Budget => "budget",
        Moderate => "moderate",
        Premium => "premium",
    }
}

choice! {
    CompanionPreference default SimilarAge {
        SimilarAge => "similar_age",
        AnyAge => "any_age",
        Older => "older",
        Younger => "younger",
    }
}

choice! {
    PersonalityType default Ambivert {
        Introvert => "introvert",
        Extrovert => "extrovert",
        Ambivert => "ambivert",
    }
}
