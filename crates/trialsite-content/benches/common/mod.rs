/// Builds an article of `sections` repeated sections covering every block kind.
pub fn generate_article(sections: usize) -> String {
    let mut out = String::new();
    for i in 0..sections {
        out.push_str(&format!("## Section {i}\n"));
        out.push_str("Recruitment delays affect **most** clinical trials.\n");
        out.push_str("Our approach combines *digital outreach* with site support.\n");
        out.push_str("- Patient-centric messaging\n");
        out.push_str(&format!("{}. Numbered step\n", i + 1));
        out.push_str("| Metric | Before | After |\n");
        out.push_str("Plain closing sentence for the section.\n\n");
    }
    out
}
