use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDocument {
    Privacy,
    Terms,
    Accessibility,
}

pub enum Block {
    Paragraph(&'static str),
    /// Bullet list of (bold label, text) items.
    List(&'static [(Option<&'static str>, &'static str)]),
}

pub struct LegalSection {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

impl LegalDocument {
    pub const ALL: [LegalDocument; 3] =
        [LegalDocument::Privacy, LegalDocument::Terms, LegalDocument::Accessibility];

    pub fn key(self) -> &'static str {
        match self {
            LegalDocument::Privacy => "privacy",
            LegalDocument::Terms => "terms",
            LegalDocument::Accessibility => "accessibility",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LegalDocument::Privacy => "Privacy Policy",
            LegalDocument::Terms => "Terms of Service",
            LegalDocument::Accessibility => "Accessibility Statement",
        }
    }

    /// Short label used by the footer links.
    pub fn link_label(self) -> &'static str {
        match self {
            LegalDocument::Privacy => "Privacy",
            LegalDocument::Terms => "Terms",
            LegalDocument::Accessibility => "Accessibility",
        }
    }

    pub fn dated_note(self) -> Option<&'static str> {
        match self {
            LegalDocument::Privacy => Some("Effective Date: October 2023"),
            LegalDocument::Terms => Some("Last Updated: October 2023"),
            LegalDocument::Accessibility => None,
        }
    }

    pub fn sections(self) -> &'static [LegalSection] {
        match self {
            LegalDocument::Privacy => PRIVACY,
            LegalDocument::Terms => TERMS,
            LegalDocument::Accessibility => ACCESSIBILITY,
        }
    }
}

impl fmt::Display for LegalDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LegalDocument {
    type Err = SiteError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        LegalDocument::ALL
            .into_iter()
            .find(|doc| doc.key() == key)
            .ok_or_else(|| SiteError::UnknownLegalDocument(key.to_string()))
    }
}

const PRIVACY: &[LegalSection] = &[
    LegalSection {
        heading: "1. Introduction",
        blocks: &[Block::Paragraph("Davidoff Real Estate Solutions (\"we\", \"us\", or \"our\") respects your privacy and is committed to protecting your personal data. This privacy policy will inform you as to how we look after your personal data when you visit our website and tell you about your privacy rights.")],
    },
    LegalSection {
        heading: "2. Data We Collect",
        blocks: &[
            Block::Paragraph("We may collect, use, store and transfer different kinds of personal data about you which we have grouped together follows:"),
            Block::List(&[
                (Some("Identity Data:"), "includes first name, last name, title."),
                (Some("Contact Data:"), "includes billing address, delivery address, email address, and telephone numbers."),
                (Some("Property Data:"), "includes details about the property you wish for us to manage in Israel."),
            ]),
        ],
    },
    LegalSection {
        heading: "3. How We Use Your Data",
        blocks: &[
            Block::Paragraph("We will only use your personal data when the law allows us to. Most commonly, we will use your personal data in the following circumstances:"),
            Block::List(&[
                (None, "To perform the contract we are about to enter into or have entered into with you (Property Management Agreement)."),
                (None, "To facilitate communication regarding your property (e.g., updates on repairs, tenants)."),
                (None, "Where it is necessary for our legitimate interests (or those of a third party) and your interests and fundamental rights do not override those interests."),
            ]),
        ],
    },
    LegalSection {
        heading: "4. Data Security",
        blocks: &[Block::Paragraph("We have put in place appropriate security measures to prevent your personal data from being accidentally lost, used, or accessed in an unauthorized way. We limit access to your personal data to those employees, agents, contractors, and other third parties who have a business need to know.")],
    },
    LegalSection {
        heading: "5. Third-Party Sharing",
        blocks: &[Block::Paragraph("We do not sell, trade, or otherwise transfer to outside parties your Personally Identifiable Information. This does not include trusted third parties who assist us in operating our website, conducting our business (e.g., local Israeli maintenance contractors), or servicing you, so long as those parties agree to keep this information confidential.")],
    },
    LegalSection {
        heading: "6. Contact Us",
        blocks: &[
            Block::Paragraph("If you have any questions about this Privacy Policy, please contact us at:"),
            Block::List(&[
                (Some("Email:"), "davidoffpm@gmail.com"),
                (Some("Phone:"), "054-321-0002"),
            ]),
        ],
    },
];

const TERMS: &[LegalSection] = &[
    LegalSection {
        heading: "1. Agreement to Terms",
        blocks: &[Block::Paragraph("These Terms of Service constitute a legally binding agreement made between you, whether personally or on behalf of an entity (\"you\") and Davidoff Real Estate Solutions (\"we,\" \"us\" or \"our\"), concerning your access to and use of our services. By using our services, you agree to be bound by these Terms.")],
    },
    LegalSection {
        heading: "2. Services Provided",
        blocks: &[Block::Paragraph("Davidoff Real Estate Solutions provides residential property management, renovation oversight, and real estate brokerage services within Israel for overseas owners. Specific deliverables, fees, and timelines are outlined in your individual Management Agreement.")],
    },
    LegalSection {
        heading: "3. Fees and Payments",
        blocks: &[Block::Paragraph("Fees for our services are due as specified in your invoice or Management Agreement. Late payments may be subject to interest charges. All currency exchange risks are the responsibility of the client unless otherwise stated.")],
    },
    LegalSection {
        heading: "4. Limitation of Liability",
        blocks: &[Block::Paragraph("To the fullest extent permitted by applicable law, Davidoff Real Estate Solutions shall not be liable for indirect, incidental, special, consequential, or punitive damages, or any loss of profits or revenues. We act as agents for the property owner and are not liable for pre-existing defects in the property or force majeure events.")],
    },
    LegalSection {
        heading: "5. Governing Law",
        blocks: &[Block::Paragraph("These Terms shall be governed by and defined following the laws of the State of Israel. Davidoff Real Estate Solutions and yourself irrevocably consent that the courts of Israel shall have exclusive jurisdiction to resolve any dispute which may arise in connection with these terms.")],
    },
];

const ACCESSIBILITY: &[LegalSection] = &[
    LegalSection {
        heading: "General Commitment",
        blocks: &[Block::Paragraph("Davidoff Real Estate Solutions is committed to ensuring digital accessibility for people with disabilities. We adhere to the belief that every person has the right to live with dignity, equality, comfort, and independence. We are continually improving the user experience for everyone and applying the relevant accessibility standards.")],
    },
    LegalSection {
        heading: "Compliance Status",
        blocks: &[
            Block::Paragraph("This website has been designed to comply with the Equal Rights for Persons with Disabilities Law, 5758-1998 and the Accessibility Regulations (Service Accessibility Adjustments), 5773-2013."),
            Block::Paragraph("The site strives to meet Israeli Standard 5568 (based on WCAG 2.0) at Level AA, as well as the international WCAG 2.1 Level AA guidelines required by US ADA standards."),
        ],
    },
    LegalSection {
        heading: "Accessibility Features",
        blocks: &[Block::List(&[
            (Some("Screen Reader Compatibility:"), "Our site is optimized for NVDA, JAWS, and VoiceOver."),
            (Some("Keyboard Navigation:"), "All interactive elements can be accessed via the Tab key."),
            (Some("Visual Contrast:"), "We maintain high contrast ratios between text and backgrounds for readability."),
            (Some("Responsive Design:"), "The interface fully adapts to various screen sizes and supports zoom up to 200% without loss of functionality."),
        ])],
    },
    LegalSection {
        heading: "Feedback & Contact",
        blocks: &[
            Block::Paragraph("We welcome your feedback on the accessibility of the Davidoff Real Estate Solutions website. Please let us know if you encounter accessibility barriers:"),
            Block::List(&[
                (Some("Phone:"), "054-321-0002"),
                (Some("E-mail:"), "davidoffpm@gmail.com"),
            ]),
            Block::Paragraph("We aim to respond to accessibility feedback within 2 business days."),
        ],
    },
];
