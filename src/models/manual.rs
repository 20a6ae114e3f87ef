/// One sub-page of the manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualSection {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub topics: &'static [ManualTopic],
}

/// A heading within a manual section, linkable by `#anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualTopic {
    pub anchor: &'static str,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

impl ManualSection {
    pub fn find(slug: &str) -> Option<&'static ManualSection> {
        MANUAL_SECTIONS.iter().find(|s| s.slug == slug)
    }

    pub fn position(&self) -> usize {
        MANUAL_SECTIONS
            .iter()
            .position(|s| s.slug == self.slug)
            .unwrap_or(0)
    }

    /// The section before this one, if any. The manual does not wrap.
    pub fn previous(&self) -> Option<&'static ManualSection> {
        self.position()
            .checked_sub(1)
            .and_then(|i| MANUAL_SECTIONS.get(i))
    }

    pub fn next(&self) -> Option<&'static ManualSection> {
        MANUAL_SECTIONS.get(self.position() + 1)
    }

    pub fn href(&self) -> String {
        format!("/manual/{}", self.slug)
    }
}

pub const MANUAL_SECTIONS: &[ManualSection] = &[
    ManualSection {
        slug: "getting-started",
        title: "Getting started",
        summary: "Install the toolkit, open a session and load your first image pairs.",
        topics: &[
            ManualTopic {
                anchor: "installation",
                title: "Installation",
                paragraphs: &[
                    "Download the latest release for your platform from the project \
                     page and unpack it into a folder of your choice. No administrator \
                     rights are required.",
                    "On first start the toolkit checks that all required libraries are \
                     present and reports anything missing.",
                ],
            },
            ManualTopic {
                anchor: "sessions",
                title: "Sessions",
                paragraphs: &[
                    "A session stores the list of images, every setting and the \
                     results. Save it at any time and reopen it later to continue \
                     exactly where you stopped.",
                ],
            },
            ManualTopic {
                anchor: "loading-images",
                title: "Loading images",
                paragraphs: &[
                    "Select a folder and choose how frames are paired. With A+B, \
                     B+C sequencing every frame is used twice; with A+B, C+D each \
                     frame belongs to exactly one pair.",
                    "Image pairs are listed in the sidebar and can be previewed as \
                     an animated toggle between both frames.",
                ],
            },
        ],
    },
    ManualSection {
        slug: "preprocessing",
        title: "Image pre-processing",
        summary: "Masks, background removal and contrast enhancement.",
        topics: &[
            ManualTopic {
                anchor: "masking",
                title: "Masking",
                paragraphs: &[
                    "Draw polygons or import a mask image to exclude walls, models \
                     and reflections. Masked regions produce no vectors.",
                ],
            },
            ManualTopic {
                anchor: "background",
                title: "Background subtraction",
                paragraphs: &[
                    "A background image computed from the mean or minimum intensity \
                     of all frames is subtracted to suppress static features.",
                ],
            },
            ManualTopic {
                anchor: "contrast",
                title: "Contrast enhancement",
                paragraphs: &[
                    "Contrast-limited adaptive histogram equalisation spreads \
                     particle intensities evenly across the image.",
                    "Intensity capping limits the influence of a few very bright \
                     particles on the correlation.",
                ],
            },
        ],
    },
    ManualSection {
        slug: "analysis",
        title: "Cross-correlation",
        summary: "Interrogation windows, passes and sub-pixel estimation.",
        topics: &[
            ManualTopic {
                anchor: "windows",
                title: "Interrogation windows",
                paragraphs: &[
                    "Each frame is divided into overlapping windows. The displacement \
                     of the particle pattern within each window becomes one vector.",
                    "Choose a window large enough to contain around ten particle \
                     images and a step of half the window size.",
                ],
            },
            ManualTopic {
                anchor: "passes",
                title: "Multiple passes",
                paragraphs: &[
                    "Later passes use smaller windows, deformed by the result of the \
                     previous pass. This resolves smaller structures and strong \
                     gradients.",
                ],
            },
            ManualTopic {
                anchor: "subpixel",
                title: "Sub-pixel estimation",
                paragraphs: &[
                    "The correlation peak is located with sub-pixel accuracy by \
                     fitting a Gaussian through its neighbouring values.",
                ],
            },
        ],
    },
    ManualSection {
        slug: "validation",
        title: "Vector validation",
        summary: "Removing and replacing spurious vectors.",
        topics: &[
            ManualTopic {
                anchor: "limits",
                title: "Velocity limits",
                paragraphs: &[
                    "Drag a rectangle in the scatter plot of all velocities to set \
                     the accepted range. Vectors outside it are discarded.",
                ],
            },
            ManualTopic {
                anchor: "outliers",
                title: "Outlier detection",
                paragraphs: &[
                    "The normalised median test compares every vector with its \
                     neighbours and flags those that deviate too strongly.",
                ],
            },
            ManualTopic {
                anchor: "interpolation",
                title: "Filling gaps",
                paragraphs: &[
                    "Removed vectors are replaced by interpolation from valid \
                     neighbours so that derived quantities remain defined.",
                ],
            },
        ],
    },
    ManualSection {
        slug: "calibration",
        title: "Calibration",
        summary: "From pixels per frame to metres per second.",
        topics: &[
            ManualTopic {
                anchor: "reference",
                title: "Reference image",
                paragraphs: &[
                    "Load an image of a ruler or target placed in the light sheet \
                     and mark a known distance.",
                ],
            },
            ManualTopic {
                anchor: "timing",
                title: "Time step",
                paragraphs: &[
                    "Enter the delay between the two laser pulses. Together with \
                     the spatial scale this converts displacements into velocities.",
                ],
            },
        ],
    },
    ManualSection {
        slug: "results",
        title: "Results and export",
        summary: "Derived quantities, plots and data export.",
        topics: &[
            ManualTopic {
                anchor: "derived",
                title: "Derived quantities",
                paragraphs: &[
                    "Vorticity, divergence, shear rate and velocity magnitude can be \
                     shown as colour maps beneath the vectors.",
                ],
            },
            ManualTopic {
                anchor: "profiles",
                title: "Profiles and areas",
                paragraphs: &[
                    "Draw a line to extract a profile or a polygon to integrate a \
                     quantity over an area.",
                ],
            },
            ManualTopic {
                anchor: "export",
                title: "Export",
                paragraphs: &[
                    "Results can be exported as text files, as data files for \
                     numerical tools, or as image sequences and videos.",
                ],
            },
        ],
    },
];
