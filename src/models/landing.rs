/// A tile in the landing-page feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub summary: &'static str,
    /// Decorative glyph shown above the title.
    pub icon: &'static str,
}

pub const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        title: "Multi-pass cross-correlation",
        summary: "FFT-based correlation with iterative window deformation and \
                  sub-pixel peak fitting for accurate displacements.",
        icon: "⊹",
    },
    FeatureCard {
        title: "Image pre-processing",
        summary: "Background subtraction, contrast equalisation and intensity \
                  capping to bring out particles in difficult recordings.",
        icon: "◐",
    },
    FeatureCard {
        title: "Vector validation",
        summary: "Universal outlier detection, velocity limits and gap \
                  interpolation, all adjustable per session.",
        icon: "✓",
    },
    FeatureCard {
        title: "Calibration",
        summary: "Convert pixels and frames into metres and seconds from a \
                  reference image and a known distance.",
        icon: "⌖",
    },
    FeatureCard {
        title: "Derived quantities",
        summary: "Vorticity, divergence, shear and streamlines computed from \
                  the validated vector field.",
        icon: "↻",
    },
    FeatureCard {
        title: "Batch sessions",
        summary: "Process thousands of image pairs with the same settings and \
                  export results for further analysis.",
        icon: "≡",
    },
];

/// A stage of the PIV pipeline narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const WORKFLOW_STEPS: &[WorkflowStep] = &[
    WorkflowStep {
        title: "Load image pairs",
        body: "Pick a sequencing style (A+B, B+C or A+B, C+D) and the tool \
               pairs your frames automatically.",
    },
    WorkflowStep {
        title: "Pre-process",
        body: "Mask out walls and reflections, then enhance particle contrast.",
    },
    WorkflowStep {
        title: "Correlate",
        body: "Interrogation windows are matched between frames to find the \
               most likely particle displacement.",
    },
    WorkflowStep {
        title: "Validate",
        body: "Spurious vectors are flagged and replaced so the field is \
               smooth and complete.",
    },
    WorkflowStep {
        title: "Explore",
        body: "Plot derived quantities, extract profiles and export data.",
    },
];

/// A member of the team section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub role: &'static str,
    pub affiliation: &'static str,
    pub bio: &'static str,
}

impl Author {
    /// Up to two initials, used for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .filter(|c| c.is_uppercase())
            .take(2)
            .collect()
    }
}

pub const AUTHORS: &[Author] = &[
    Author {
        name: "Mara Lindqvist",
        role: "Project lead",
        affiliation: "Institute for Fluid Mechanics",
        bio: "Works on turbulent boundary layers and has maintained the \
              correlation engine since its first release.",
    },
    Author {
        name: "Tomás Ferreira",
        role: "Core developer",
        affiliation: "Laboratory of Experimental Aerodynamics",
        bio: "Responsible for window deformation and the validation filters.",
    },
    Author {
        name: "Aiko Hayashi",
        role: "Documentation",
        affiliation: "Department of Mechanical Engineering",
        bio: "Writes the manual and teaches the annual PIV summer course.",
    },
];

pub const CITATION: &str = "Lindqvist M., Ferreira T., Hayashi A. PIVkit: an open \
toolkit for Particle Image Velocimetry. Journal of Open Research Software.";
