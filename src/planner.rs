use crate::model::StudyPlanItem;

/// Plan de estudio determinista según las horas disponibles.
/// Tabla fija: <=1h -> 2 bloques, ==2h -> 3 bloques, >=3h -> 4 bloques.
pub fn create_study_plan(hours: u32, subject: &str) -> Vec<StudyPlanItem> {
    let mut plan = Vec::new();

    if hours <= 1 {
        plan.push(StudyPlanItem {
            label: format!("30 min: Study your weakest topic in {subject}"),
            hours: 0.5,
        });
        plan.push(StudyPlanItem {
            label: format!("30 min: Quick revision in {subject}"),
            hours: 0.5,
        });
    } else if hours == 2 {
        plan.push(StudyPlanItem {
            label: format!("40 min: Practice {subject} exercises"),
            hours: 40.0 / 60.0,
        });
        plan.push(StudyPlanItem {
            label: "40 min: Revise concepts".to_string(),
            hours: 40.0 / 60.0,
        });
        plan.push(StudyPlanItem {
            label: "40 min: Notes review".to_string(),
            hours: 40.0 / 60.0,
        });
    } else {
        // 3 horas o más: mismo plan, las horas extra no añaden bloques
        plan.push(StudyPlanItem {
            label: format!("1 hour: {subject} main topic"),
            hours: 1.0,
        });
        plan.push(StudyPlanItem {
            label: format!("1 hour: {subject} exercises"),
            hours: 1.0,
        });
        plan.push(StudyPlanItem {
            label: "1 hour: Revision".to_string(),
            hours: 1.0,
        });
        plan.push(StudyPlanItem {
            label: "30 min: Notes and review".to_string(),
            hours: 0.5,
        });
    }

    plan
}
