/// One entry of the header navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
    /// Opens off-site; rendered with `rel="noopener"`.
    pub external: bool,
}

impl NavEntry {
    /// Whether this entry is the current page (or a parent of it).
    pub fn is_active(&self, path: &str) -> bool {
        if self.external {
            return false;
        }
        match self.href {
            "/" => path == "/",
            href if href.contains('#') => false,
            href => path == href || path.starts_with(&format!("{}/", href)),
        }
    }
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        href: "/",
        external: false,
    },
    NavEntry {
        label: "Features",
        href: "/#features",
        external: false,
    },
    NavEntry {
        label: "Workflow",
        href: "/#workflow",
        external: false,
    },
    NavEntry {
        label: "Manual",
        href: "/manual",
        external: false,
    },
    NavEntry {
        label: "Team",
        href: "/#team",
        external: false,
    },
    NavEntry {
        label: "Source",
        href: "https://github.com/pivkit/pivkit",
        external: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Documentation",
        links: &[
            ("Getting started", "/manual/getting-started"),
            ("Image pre-processing", "/manual/preprocessing"),
            ("Cross-correlation", "/manual/analysis"),
            ("Calibration", "/manual/calibration"),
        ],
    },
    FooterColumn {
        heading: "Project",
        links: &[
            ("Features", "/#features"),
            ("Team", "/#team"),
            ("How to cite", "/#cite"),
        ],
    },
    FooterColumn {
        heading: "Community",
        links: &[
            ("Source code", "https://github.com/pivkit/pivkit"),
            ("Issue tracker", "https://github.com/pivkit/pivkit/issues"),
            ("Discussions", "https://github.com/pivkit/pivkit/discussions"),
        ],
    },
];
