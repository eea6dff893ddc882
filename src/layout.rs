//! Fixed names and conventions for the documentation tree.
//!
//! Every filename, marker string, config key, and navigation entry the
//! pipeline touches is declared here, in one place. The build is a contract
//! over these names: fragment order determines document structure, config
//! keys are matched by exact prefix (padding included), and the navigation
//! tables drive which tab is highlighted on which page.

/// Fragments concatenated into the main documentation page, in order.
/// Order is load-bearing: it is the chapter order of the generated manual.
pub const MAIN_FRAGMENTS: [&str; 6] = [
    "introduction.txt",
    "installation.txt",
    "usage.txt",
    "tutorial.txt",
    "glossary.txt",
    "option_index.txt",
];

/// Fragments concatenated into the API documentation page.
pub const API_FRAGMENTS: [&str; 1] = ["roadmap.txt"];

/// Synthesized page consumed by the user-docs generator run.
pub const MAIN_PAGE: &str = "mainpage.dox";
/// Synthesized page consumed by the API-docs generator run.
pub const API_PAGE: &str = "api.dox";

/// Doxygen comment block opening the main page.
pub const MAIN_OPEN: &str = "/**\n\n\\mainpage\n\n";
/// Trailing directive embedding the logo into the LaTeX manual.
pub const MAIN_TRAILER: &str = "\n\\image latex logo.pdf \"Logo.\" height=10cm\n\n";
/// Doxygen comment block opening the API page.
pub const API_OPEN: &str = "/**\n\n";
/// Whitespace between the last API fragment and the closing marker.
pub const API_TRAILER: &str = "\n\n";
/// Closing marker shared by both pages.
pub const PAGE_CLOSE: &str = "*/";

/// Command whose captured stdout becomes the option index fragment.
pub const OPTION_INDEX_PROGRAM: &str = "python";
pub const OPTION_INDEX_ARGS: [&str; 1] = ["make-option-index.py"];
/// Destination for the captured option index (also a main-page fragment).
pub const OPTION_INDEX: &str = "option_index.txt";

/// Generator configuration for the user documentation run.
pub const DOXYGEN_CFG: &str = "doxygen.cfg";
/// Generator configuration for the API documentation run.
pub const API_CFG: &str = "api.cfg";

/// Config keys, matched by exact prefix. The column padding is part of the
/// key: Doxygen configs align values at a fixed column and the patcher must
/// not rewrite lines that merely share the word.
pub const FILTER_KEY: &str = "FILTER_PATTERNS        =";
pub const INPUT_KEY: &str = "INPUT                  =";

/// Source filter executable expected on the system path.
pub const FILTER_TOOL: &str = "doxypy";
/// Required suffix when the user supplies the filter script path by hand.
pub const FILTER_SCRIPT_SUFFIX: &str = "doxypy.py";

/// Generated HTML tree (user docs); API docs land in its `api` subdirectory.
pub const HTML_DIR: &str = "html";
pub const API_SUBDIR: &str = "api";
/// Generated LaTeX tree; `make` in here produces `refman.pdf`.
pub const LATEX_DIR: &str = "latex";
pub const REFMAN: &str = "refman.pdf";

/// Logo asset copied into each LaTeX tree before the PDF build.
pub const LOGO: &str = "images/logo.pdf";
pub const LOGO_NAME: &str = "logo.pdf";

/// Final PDF deliverables, copied out of the LaTeX trees.
pub const MANUAL_PDF: &str = "Manual.pdf";
pub const API_MANUAL_PDF: &str = "API-Manual.pdf";

/// Branch the generated documentation is committed to.
pub const PUBLISH_BRANCH: &str = "gh-pages";

/// One navigation tab: link target, visible label, and the filename (if any)
/// that renders this entry as the current tab.
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
    pub current_when: Option<&'static str>,
}

/// Tabs injected into every page of the main HTML tree. The API tab points
/// into the subtree and is never the current tab up here.
pub const MAIN_NAV: [NavEntry; 5] = [
    NavEntry {
        href: "installation.html",
        label: "Installation",
        current_when: Some("installation.html"),
    },
    NavEntry {
        href: "usage.html",
        label: "Usage",
        current_when: Some("usage.html"),
    },
    NavEntry {
        href: "tutorial.html",
        label: "Tutorial",
        current_when: Some("tutorial.html"),
    },
    NavEntry {
        href: "glossary.html",
        label: "Glossary",
        current_when: Some("glossary.html"),
    },
    NavEntry {
        href: "api/roadmap.html",
        label: "API",
        current_when: None,
    },
];

/// Tabs injected into every page of the `html/api/` subtree. "Main Page"
/// always climbs back to the user docs.
pub const API_NAV: [NavEntry; 2] = [
    NavEntry {
        href: "../index.html",
        label: "Main Page",
        current_when: None,
    },
    NavEntry {
        href: "roadmap.html",
        label: "Project Roadmap",
        current_when: Some("roadmap.html"),
    },
];
