use super::{
    records::{CaseStudy, WhitePaper},
    vocab::{Region, TherapeuticArea},
};

pub static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: 1,
        title: "Global Oncology Study Success",
        description: "Multi-country recruitment for a Phase III immunotherapy trial in \
                      non-small cell lung cancer, completed four months ahead of plan.",
        area: TherapeuticArea::Oncology,
        region: Region::Global,
        outcome: "Enrollment completed 4 months early",
        patients_enrolled: 1240,
    },
    CaseStudy {
        id: 2,
        title: "Accelerating Alzheimer's Enrollment",
        description: "Caregiver-focused outreach that brought early-stage Alzheimer's \
                      patients into a disease-modifying therapy study.",
        area: TherapeuticArea::Neurology,
        region: Region::NorthAmerica,
        outcome: "Screen failure rate reduced by 38%",
        patients_enrolled: 410,
    },
    CaseStudy {
        id: 3,
        title: "Rare Disease Research Network",
        description: "Advocacy-group partnerships to locate patients with a lysosomal \
                      storage disorder across eleven countries.",
        area: TherapeuticArea::RareDisease,
        region: Region::Europe,
        outcome: "92% of target cohort identified",
        patients_enrolled: 64,
    },
    CaseStudy {
        id: 4,
        title: "Heart Failure Outcomes Trial",
        description: "Community cardiology clinics engaged to reach patients with \
                      reduced ejection fraction outside academic centres.",
        area: TherapeuticArea::Cardiology,
        region: Region::NorthAmerica,
        outcome: "Site activation time halved",
        patients_enrolled: 2150,
    },
    CaseStudy {
        id: 5,
        title: "Pediatric Epilepsy Recruitment",
        description: "Family-centred digital campaign supporting a pediatric seizure \
                      study with strict eligibility criteria.",
        area: TherapeuticArea::Neurology,
        region: Region::Europe,
        outcome: "Randomization target met in 9 months",
        patients_enrolled: 185,
    },
    CaseStudy {
        id: 6,
        title: "Atopic Dermatitis Phase III",
        description: "Localized social media outreach for a moderate-to-severe eczema \
                      biologic across Japan, Korea and Australia.",
        area: TherapeuticArea::Dermatology,
        region: Region::AsiaPacific,
        outcome: "3.1x referral volume versus forecast",
        patients_enrolled: 780,
    },
    CaseStudy {
        id: 7,
        title: "Vaccine Trial Rapid Start-Up",
        description: "High-volume pre-screening for a respiratory vaccine study with a \
                      seasonal enrollment window.",
        area: TherapeuticArea::InfectiousDisease,
        region: Region::LatinAmerica,
        outcome: "30,000 volunteers pre-screened in 6 weeks",
        patients_enrolled: 8600,
    },
    CaseStudy {
        id: 8,
        title: "Rheumatoid Arthritis Diversity Outreach",
        description: "Culturally adapted materials that improved representation of \
                      underserved communities in an immunology trial.",
        area: TherapeuticArea::Immunology,
        region: Region::NorthAmerica,
        outcome: "Minority participation doubled",
        patients_enrolled: 530,
    },
    CaseStudy {
        id: 9,
        title: "Lung Cancer Biomarker Screening",
        description: "Biomarker pre-screening program feeding a targeted oncology \
                      study at high-volume Asian sites.",
        area: TherapeuticArea::Oncology,
        region: Region::AsiaPacific,
        outcome: "Mutation-positive referrals up 55%",
        patients_enrolled: 320,
    },
];

pub static WHITE_PAPERS: &[WhitePaper] = &[
    WhitePaper {
        id: 1,
        title: "Patient-Centric Recruitment in Oncology",
        description: "How patient journey mapping shortens enrollment timelines in \
                      solid tumour trials.",
        area: TherapeuticArea::Oncology,
        published_year: 2024,
        reading_minutes: 12,
        body: "# Patient-Centric Recruitment in Oncology

## Executive Summary
Oncology trials face **the highest screen failure rates** of any therapeutic area.
This paper describes a *journey-first* approach to outreach.

## The Challenge
- Narrow biomarker-driven eligibility
- Competing trials at the same sites
- Patients learning about trials *after* treatment decisions

## Our Approach
1. Map the diagnosis-to-treatment journey
2. Place trial information at each decision point
3. Support sites with pre-screened referrals

| Metric | Industry | Our programs |
|---|---|---|
| Screen failure rate | 45% | 28% |
| Time to first patient | 14 weeks | 6 weeks |

## Conclusion
Meeting patients **where decisions happen** is the single largest lever on enrollment.
",
    },
    WhitePaper {
        id: 2,
        title: "Reaching Caregivers in Neurology Trials",
        description: "Why caregivers are the real audience for memory disorder studies \
                      and how to engage them.",
        area: TherapeuticArea::Neurology,
        published_year: 2023,
        reading_minutes: 9,
        body: "# Reaching Caregivers in Neurology Trials

In memory disorder studies the *caregiver* usually makes the first contact.

## What Caregivers Need
- Clear visit schedules
- Transport and respite support
- Honest information about **risks and burden**

### Measured Impact
1. Caregiver-targeted campaigns doubled qualified referrals
2. Dropout fell when study partners were briefed up front
",
    },
    WhitePaper {
        id: 3,
        title: "Finding Patients in Rare Disease",
        description: "Registry, advocacy and genetic testing partnerships for cohorts \
                      measured in dozens.",
        area: TherapeuticArea::RareDisease,
        published_year: 2024,
        reading_minutes: 15,
        body: "# Finding Patients in Rare Disease

When the global population is a few thousand, **every patient counts**.

## Channels That Work
- Patient advocacy organizations
- Genetic testing laboratories
- Specialist referral networks

| Channel | Share of referrals |
|---|---|
| Advocacy groups | 41% |
| Testing labs | 33% |
| Specialists | 26% |

Results vary by condition and *should be validated per program*.
",
    },
    WhitePaper {
        id: 4,
        title: "Decentralized Elements in Cardiology Studies",
        description: "Home visits, wearables and remote consent in large outcome trials.",
        area: TherapeuticArea::Cardiology,
        published_year: 2022,
        reading_minutes: 8,
        body: "# Decentralized Elements in Cardiology Studies

## Where Remote Works
- Remote consent for follow-up visits
- Wearable rhythm monitoring
- Home nursing for blood draws

## Where It Does Not
Procedures that need imaging still require **in-person site visits**.
",
    },
    WhitePaper {
        id: 5,
        title: "Diversity Plans That Deliver",
        description: "Practical steps toward representative enrollment in immunology \
                      and infectious disease trials.",
        area: TherapeuticArea::Immunology,
        published_year: 2025,
        reading_minutes: 11,
        body: "# Diversity Plans That Deliver

Representative enrollment starts **before** the protocol is final.

## Five Practical Steps
1. Set enrollment goals from disease epidemiology
2. Choose sites inside the communities you need to reach
3. Translate and culturally adapt every patient-facing asset
4. Reduce participation burden with travel support
5. Report progress *monthly* to the study team
",
    },
];

/// Looks up a case study by id.
pub fn case_study(id: u32) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.id == id)
}

/// Looks up a white paper by id.
pub fn white_paper(id: u32) -> Option<&'static WhitePaper> {
    WHITE_PAPERS.iter().find(|w| w.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::markup::blocks::ContentBlock;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = CASE_STUDIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CASE_STUDIES.len());
        let ids: HashSet<_> = WHITE_PAPERS.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), WHITE_PAPERS.len());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(
            case_study(1).map(|c| c.title),
            Some("Global Oncology Study Success")
        );
        assert!(case_study(999).is_none());
        assert_eq!(white_paper(3).map(|w| w.area), Some(TherapeuticArea::RareDisease));
    }

    #[test]
    fn every_white_paper_opens_with_its_title() {
        for paper in WHITE_PAPERS {
            let blocks = paper.render();
            assert_eq!(
                blocks.first(),
                Some(&ContentBlock::Heading {
                    level: 1,
                    text: paper.title.to_string()
                }),
                "white paper {} body should start with its title",
                paper.id
            );
        }
    }

    #[test]
    fn oncology_paper_contains_a_table() {
        let blocks = white_paper(1).map(|w| w.render()).unwrap_or_default();
        let rows = blocks
            .iter()
            .filter(|b| matches!(b, ContentBlock::TableRow { .. }))
            .count();
        assert_eq!(rows, 4);
    }
}
