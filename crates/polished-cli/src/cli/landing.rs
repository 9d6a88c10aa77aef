//! Landing page shown when `polished` runs without a subcommand.
//!
//! Static marketing content and a call to action -- no business logic.

use console::style;

/// Print the landing page.
pub fn print_landing() {
    println!();
    println!("  {} {}", "\u{2728}", style("Polished").cyan().bold());
    println!(
        "  {}",
        style("Your resume, reviewed by an AI with 20 years of tech hiring experience").dim()
    );
    println!();

    let features = [
        (
            "20 Years of Expertise",
            "AI trained on insights from reviewing 50,000+ resumes at top tech companies",
        ),
        (
            "ATS Optimized",
            "Ensure your resume passes Applicant Tracking Systems and reaches human eyes",
        ),
        (
            "Interactive Feedback",
            "Chat naturally to get specific advice, rewrites, and improvements",
        ),
        (
            "Real-time Preview",
            "See your improvements live as the assistant rewrites sections",
        ),
        (
            "Factually Accurate",
            "AI never invents details - only enhances what you provide",
        ),
    ];

    for (title, description) in features {
        println!("  {} {}", style("*").cyan().bold(), style(title).bold());
        println!("    {}", style(description).dim());
    }

    println!();
    println!("  {}", style("How it works:").bold());
    let steps = [
        ("01", "Upload", "polished review <file>  (PDF, DOCX, or TXT)"),
        ("02", "Review", "Get instant expert analysis with actionable feedback"),
        ("03", "Refine", "Chat to improve specific sections or get a full rewrite"),
        ("04", "Save", "Write the rewritten resume to disk with /save"),
    ];
    for (number, title, description) in steps {
        println!(
            "  {}  {}  {}",
            style(number).cyan().dim(),
            style(title).bold(),
            style(description).dim()
        );
    }

    println!();
    println!(
        "  {} {}",
        style("Get started:").bold(),
        style("polished review resume.pdf").green()
    );
    println!();
}
