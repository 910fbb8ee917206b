use serde::{Deserialize, Serialize};

/// One planning entry per video. Every field is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Video Topic")]
    pub video_topic: String,
    #[serde(rename = "Target Keywords")]
    pub target_keywords: String,
    #[serde(rename = "Script Status")]
    pub script_status: String,
    #[serde(rename = "Editing Status")]
    pub editing_status: String,
    #[serde(rename = "Thumbnail Creation")]
    pub thumbnail_creation: String,
    #[serde(rename = "Scheduled Posting Date")]
    pub scheduled_posting_date: String,
    #[serde(rename = "Promotion Strategy")]
    pub promotion_strategy: String,
    #[serde(rename = "Audience Analysis")]
    pub audience_analysis: String,
    #[serde(rename = "Call-to-Action")]
    pub call_to_action: String,
    #[serde(rename = "Feedback and Adjustments")]
    pub feedback_and_adjustments: String,
}

/// Field identifiers in declaration order. The order drives display,
/// prompting and the export column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanField {
    Date,
    VideoTopic,
    TargetKeywords,
    ScriptStatus,
    EditingStatus,
    ThumbnailCreation,
    ScheduledPostingDate,
    PromotionStrategy,
    AudienceAnalysis,
    CallToAction,
    FeedbackAndAdjustments,
}

impl PlanField {
    pub const ALL: [PlanField; 11] = [
        PlanField::Date,
        PlanField::VideoTopic,
        PlanField::TargetKeywords,
        PlanField::ScriptStatus,
        PlanField::EditingStatus,
        PlanField::ThumbnailCreation,
        PlanField::ScheduledPostingDate,
        PlanField::PromotionStrategy,
        PlanField::AudienceAnalysis,
        PlanField::CallToAction,
        PlanField::FeedbackAndAdjustments,
    ];

    /// Column header, JSON key and display label.
    pub fn label(self) -> &'static str {
        match self {
            PlanField::Date => "Date",
            PlanField::VideoTopic => "Video Topic",
            PlanField::TargetKeywords => "Target Keywords",
            PlanField::ScriptStatus => "Script Status",
            PlanField::EditingStatus => "Editing Status",
            PlanField::ThumbnailCreation => "Thumbnail Creation",
            PlanField::ScheduledPostingDate => "Scheduled Posting Date",
            PlanField::PromotionStrategy => "Promotion Strategy",
            PlanField::AudienceAnalysis => "Audience Analysis",
            PlanField::CallToAction => "Call-to-Action",
            PlanField::FeedbackAndAdjustments => "Feedback and Adjustments",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            PlanField::Date => "Enter the date (DD/MM/YYYY): ",
            PlanField::VideoTopic => "Enter the video topic: ",
            PlanField::TargetKeywords => "Enter the target keywords (separated by commas): ",
            PlanField::ScriptStatus => "Enter the script status: ",
            PlanField::EditingStatus => "Enter the editing status: ",
            PlanField::ThumbnailCreation => "Enter the thumbnail creation status: ",
            PlanField::ScheduledPostingDate => "Enter the scheduled posting date (DD/MM/YYYY): ",
            PlanField::PromotionStrategy => "Enter the promotion strategy: ",
            PlanField::AudienceAnalysis => "Enter the audience analysis: ",
            PlanField::CallToAction => "Enter the call-to-action: ",
            PlanField::FeedbackAndAdjustments => "Enter feedback and adjustments: ",
        }
    }
}

impl PlanEntry {
    pub fn get(&self, field: PlanField) -> &str {
        match field {
            PlanField::Date => &self.date,
            PlanField::VideoTopic => &self.video_topic,
            PlanField::TargetKeywords => &self.target_keywords,
            PlanField::ScriptStatus => &self.script_status,
            PlanField::EditingStatus => &self.editing_status,
            PlanField::ThumbnailCreation => &self.thumbnail_creation,
            PlanField::ScheduledPostingDate => &self.scheduled_posting_date,
            PlanField::PromotionStrategy => &self.promotion_strategy,
            PlanField::AudienceAnalysis => &self.audience_analysis,
            PlanField::CallToAction => &self.call_to_action,
            PlanField::FeedbackAndAdjustments => &self.feedback_and_adjustments,
        }
    }

    pub fn set(&mut self, field: PlanField, value: impl Into<String>) {
        let slot = match field {
            PlanField::Date => &mut self.date,
            PlanField::VideoTopic => &mut self.video_topic,
            PlanField::TargetKeywords => &mut self.target_keywords,
            PlanField::ScriptStatus => &mut self.script_status,
            PlanField::EditingStatus => &mut self.editing_status,
            PlanField::ThumbnailCreation => &mut self.thumbnail_creation,
            PlanField::ScheduledPostingDate => &mut self.scheduled_posting_date,
            PlanField::PromotionStrategy => &mut self.promotion_strategy,
            PlanField::AudienceAnalysis => &mut self.audience_analysis,
            PlanField::CallToAction => &mut self.call_to_action,
            PlanField::FeedbackAndAdjustments => &mut self.feedback_and_adjustments,
        };
        *slot = value.into();
    }

    /// `(label, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        PlanField::ALL
            .iter()
            .map(move |field| (field.label(), self.get(*field)))
    }

    /// Single display line: `Label: value` pairs joined by `", "`.
    pub fn display_line(&self) -> String {
        self.fields()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Lowercased field values joined by newlines. Input arrives one line
    /// at a time, so a search term can never span two fields.
    pub fn search_haystack(&self) -> String {
        PlanField::ALL
            .iter()
            .map(|field| self.get(*field))
            .collect::<Vec<_>>()
            .join("\n")
            .to_lowercase()
    }
}
