use folio_latex::*;

#[test]
fn test_minimal_article() {
    let doc = Document::builder(DocumentClass::Article).build();
    assert_eq!(
        doc.to_latex(),
        "\\documentclass{article}\n\n\\begin{document}\n\n\\end{document}\n"
    );
}

#[test]
fn test_full_preamble_layout() {
    let doc = Document::builder(DocumentClass::Report)
        .class_option("12pt")
        .class_option("twoside")
        .package(Package::with_options("geometry", ["margin=1in", "a4paper"]))
        .package(Package::new("graphicx"))
        .title("On Margins")
        .author("A. Printer")
        .date("2024")
        .content("Opening words.")
        .build();

    let expected = "\\documentclass[12pt,twoside]{report}\n\
\n\
\\usepackage[margin=1in,a4paper]{geometry}\n\
\\usepackage{graphicx}\n\
\n\
\\title{On Margins}\n\
\\author{A. Printer}\n\
\\date{2024}\n\
\n\
\\begin{document}\n\
\n\
\\maketitle\n\
\n\
Opening words.\n\
\n\
\\end{document}\n";

    assert_eq!(doc.to_latex(), expected);
}

#[test]
fn test_date_alone_has_no_maketitle() {
    let latex = Document::builder(DocumentClass::Article)
        .date("today")
        .build()
        .to_latex();

    assert!(latex.contains("\\date{today}\n\n\\begin{document}"));
    assert!(!latex.contains("\\maketitle"));
}

#[test]
fn test_empty_metadata_strings_are_unset() {
    let latex = Document::builder(DocumentClass::Article)
        .title("")
        .author("")
        .build()
        .to_latex();

    assert_eq!(
        latex,
        "\\documentclass{article}\n\n\\begin{document}\n\n\\end{document}\n"
    );
}

#[test]
fn test_sections_in_call_order() {
    let latex = Document::builder(DocumentClass::Article)
        .section("Intro", "First.")
        .subsection("Detail", "Second.")
        .content("\\newpage")
        .build()
        .to_latex();

    let intro = latex.find("\\section{Intro}\nFirst.\n\n").unwrap();
    let detail = latex.find("\\subsection{Detail}\nSecond.\n\n").unwrap();
    let page = latex.find("\\newpage\n\n\\end{document}").unwrap();
    assert!(intro < detail && detail < page);
}

#[test]
fn test_chapter_dropped_for_article() {
    let doc = Document::builder(DocumentClass::Article)
        .chapter("One", "Body")
        .build();

    assert!(doc.content().is_empty());
    assert!(!doc.to_latex().contains("\\chapter"));
}

#[test]
fn test_chapter_kept_for_book_and_report() {
    for class in [DocumentClass::Book, DocumentClass::Report] {
        let latex = Document::builder(class)
            .chapter("One", "Body")
            .build()
            .to_latex();
        assert!(latex.contains("\\chapter{One}\nBody\n\n"), "{}", class);
    }
}

#[test]
fn test_package_bundles() {
    let standard = PackageBundle::Standard.packages();
    assert_eq!(standard.len(), 9);
    assert_eq!(standard[0].to_string(), "\\usepackage[utf8]{inputenc}");
    assert_eq!(standard[3].to_string(), "\\usepackage[margin=1in]{geometry}");

    let academic: Vec<String> = PackageBundle::Academic
        .packages()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(academic.len(), 15);
    assert!(academic.ends_with(&[
        "natbib".to_string(),
        "algorithm".to_string(),
        "algorithmic".to_string(),
        "listings".to_string(),
        "booktabs".to_string(),
        "caption".to_string(),
    ]));

    let book = PackageBundle::Book.packages();
    assert_eq!(book.len(), 12);
    assert_eq!(book[11].to_string(), "\\usepackage{tocloft}");
}

#[test]
fn test_bundle_on_builder() {
    let latex = Document::builder(DocumentClass::Book)
        .bundle(PackageBundle::Book)
        .build()
        .to_latex();

    assert!(latex.starts_with("\\documentclass{book}\n\n\\usepackage[utf8]{inputenc}\n"));
    assert!(latex.contains("\\usepackage{fancyhdr}\n"));
    assert!(latex.contains("\\usepackage{tocloft}\n\n\\begin{document}"));
}

#[test]
fn test_document_class_parse() {
    assert_eq!("article".parse::<DocumentClass>(), Ok(DocumentClass::Article));
    assert_eq!("Beamer".parse::<DocumentClass>(), Ok(DocumentClass::Beamer));
    assert!("memoir".parse::<DocumentClass>().is_err());
}
