//! Static copy rendered by the shell.

pub const APP_VERSION: &str = "v1.0.0";

pub const LANDING_PRODUCT_NAME: &str = "AIR-hr";

pub const LANDING_DESCRIPTION: &str = "Developed by experts in AI and federal Human Resource (HR) \
regulations, the AIR-hr tool simplifies complex regulations and provides employees with clear, \
actionable explanations that help them navigate government HR policies effectively. It ensures \
employees fully understand their options, minimizing confusion and improving decision-making.";

pub const LAUNCH_LABEL: &str = "Launch";

pub const COLLABORATION_TITLE: &str = "AIR-hr is a collaboration between";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub url: &'static str,
}

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "Pyramid Systems",
        url: "https://pyramidsystems.com",
    },
    Partner {
        name: "YRCI",
        url: "https://yrci.com",
    },
];

pub const MEDIA_CONTACT: &str = "Media Contact: media@AIR-hr.ai";

pub const SHARE_DIALOG_TITLE: &str = "Share the web app";

pub const DISCLAIMER_LINK_LABEL: &str = "Disclaimer";

pub const DISCLAIMER_TITLE: &str = "Disclaimer";

pub const DISCLAIMER_CONFIRM_LABEL: &str = "I Understand";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclaimerSection {
    pub heading: Option<&'static str>,
    pub paragraphs: &'static [&'static str],
}

pub const DISCLAIMER_SECTIONS: &[DisclaimerSection] = &[
    DisclaimerSection {
        heading: None,
        paragraphs: &["This Human Resource Artificial Intelligence (HR AI) software application \
provides responses based on Title 5 of the Code of Federal Regulations (5 CFR) and is powered by \
technology developed by Pyramid Systems Inc. The system has been trained and informed by subject \
matter experts from YRCI to enhance accuracy and relevance. The information provided by this \
application is dependent on the most recent version of 5 CFR available at the time of inquiry. \
While every effort is made to ensure the accuracy and currency of responses, users should verify \
information against official regulatory sources. This software does not provide legal or \
authoritative interpretations of federal regulations and should not be relied upon as a \
substitute for professional human resources or legal advice."],
    },
    DisclaimerSection {
        heading: Some("Data Privacy & Security"),
        paragraphs: &[
            "This application may collect and process user inputs to improve response quality \
and system performance. However, it does not store or share personal information (PI) or \
sensitive information beyond what is necessary for operational functionality. All data handling \
practices comply with applicable federal and state privacy laws and security protocols.",
            "Users should refrain from entering confidential, personal, or sensitive information \
when interacting with the system. By using this application, users acknowledge and accept the \
privacy practices outlined above.",
            "By continuing to use this application, users agree that the information is provided \
on an \"as-is\" basis and that the developers and trainers of this software assume no liability \
for any decisions made based on its responses.",
        ],
    },
];
