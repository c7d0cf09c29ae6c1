//! Narrow worker capabilities.
//!
//! A worker implements only the capabilities it really has. Callers ask for a
//! capability through the `as_*` accessors on [`Worker`] and skip the duty
//! when it is absent, instead of calling a method that would refuse at runtime.

use serde::Serialize;

pub trait Workable {
    fn work(&self) -> &'static str;
}

pub trait Eatable {
    fn eat(&self) -> &'static str;
}

pub trait Sleepable {
    fn sleep(&self) -> &'static str;
}

pub trait Programmable {
    fn program(&self) -> &'static str;
    fn debug_code(&self) -> &'static str;
}

pub trait Manageable {
    fn manage_team(&self) -> &'static str;
    fn conduct_meetings(&self) -> &'static str;
}

pub trait UiDesignable {
    fn design_ui(&self) -> &'static str;
    fn create_wireframes(&self) -> &'static str;
}

pub trait Testable {
    fn test_software(&self) -> &'static str;
    fn write_test_cases(&self) -> &'static str;
}

pub trait Worker: Workable {
    fn role(&self) -> &str;

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        None
    }

    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        None
    }

    fn as_programmable(&self) -> Option<&dyn Programmable> {
        None
    }

    fn as_manageable(&self) -> Option<&dyn Manageable> {
        None
    }

    fn as_ui_designable(&self) -> Option<&dyn UiDesignable> {
        None
    }

    fn as_testable(&self) -> Option<&dyn Testable> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Duty {
    pub capability: &'static str,
    pub activity: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerProfile {
    pub role: String,
    pub duties: Vec<Duty>,
}

/// Lists what a worker does, calling only the capabilities it declares.
pub fn describe_worker(worker: &dyn Worker) -> WorkerProfile {
    let mut duties = vec![Duty {
        capability: "work",
        activity: worker.work(),
    }];
    let mut push = |capability, activity| duties.push(Duty { capability, activity });

    if let Some(w) = worker.as_eatable() {
        push("eat", w.eat());
    }
    if let Some(w) = worker.as_sleepable() {
        push("sleep", w.sleep());
    }
    if let Some(w) = worker.as_programmable() {
        push("program", w.program());
        push("debug", w.debug_code());
    }
    if let Some(w) = worker.as_manageable() {
        push("manage", w.manage_team());
        push("meet", w.conduct_meetings());
    }
    if let Some(w) = worker.as_ui_designable() {
        push("design", w.design_ui());
        push("wireframe", w.create_wireframes());
    }
    if let Some(w) = worker.as_testable() {
        push("test", w.test_software());
        push("write_tests", w.write_test_cases());
    }

    WorkerProfile {
        role: worker.role().to_string(),
        duties,
    }
}

pub struct Robot;

impl Workable for Robot {
    fn work(&self) -> &'static str {
        "Robot working 24/7 without breaks"
    }
}

impl Programmable for Robot {
    fn program(&self) -> &'static str {
        "Robot executing programmed instructions"
    }

    fn debug_code(&self) -> &'static str {
        "Robot running diagnostic protocols"
    }
}

impl Worker for Robot {
    fn role(&self) -> &str {
        "Robot"
    }

    fn as_programmable(&self) -> Option<&dyn Programmable> {
        Some(self)
    }
}

pub struct HumanWorker;

impl Workable for HumanWorker {
    fn work(&self) -> &'static str {
        "Human working during business hours"
    }
}

impl Eatable for HumanWorker {
    fn eat(&self) -> &'static str {
        "Human taking a lunch break"
    }
}

impl Sleepable for HumanWorker {
    fn sleep(&self) -> &'static str {
        "Human resting for 8 hours"
    }
}

impl Worker for HumanWorker {
    fn role(&self) -> &str {
        "Human Worker"
    }

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }

    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        Some(self)
    }
}

pub struct SoftwareDeveloper;

impl Workable for SoftwareDeveloper {
    fn work(&self) -> &'static str {
        "Developer coding new features"
    }
}

impl Eatable for SoftwareDeveloper {
    fn eat(&self) -> &'static str {
        "Developer grabbing coffee and snacks"
    }
}

impl Sleepable for SoftwareDeveloper {
    fn sleep(&self) -> &'static str {
        "Developer sleeping (hopefully enough)"
    }
}

impl Programmable for SoftwareDeveloper {
    fn program(&self) -> &'static str {
        "Developer writing clean, maintainable code"
    }

    fn debug_code(&self) -> &'static str {
        "Developer fixing bugs and optimizing performance"
    }
}

impl Testable for SoftwareDeveloper {
    fn test_software(&self) -> &'static str {
        "Developer writing unit tests"
    }

    fn write_test_cases(&self) -> &'static str {
        "Developer creating comprehensive test scenarios"
    }
}

impl Worker for SoftwareDeveloper {
    fn role(&self) -> &str {
        "Software Developer"
    }

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }

    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        Some(self)
    }

    fn as_programmable(&self) -> Option<&dyn Programmable> {
        Some(self)
    }

    fn as_testable(&self) -> Option<&dyn Testable> {
        Some(self)
    }
}

pub struct TeamManager;

impl Workable for TeamManager {
    fn work(&self) -> &'static str {
        "Manager coordinating team activities"
    }
}

impl Eatable for TeamManager {
    fn eat(&self) -> &'static str {
        "Manager having working lunch with team"
    }
}

impl Sleepable for TeamManager {
    fn sleep(&self) -> &'static str {
        "Manager resting after long planning sessions"
    }
}

impl Manageable for TeamManager {
    fn manage_team(&self) -> &'static str {
        "Manager guiding team towards project goals"
    }

    fn conduct_meetings(&self) -> &'static str {
        "Manager running productive team meetings"
    }
}

impl Worker for TeamManager {
    fn role(&self) -> &str {
        "Team Manager"
    }

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }

    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        Some(self)
    }

    fn as_manageable(&self) -> Option<&dyn Manageable> {
        Some(self)
    }
}

pub struct UiDesigner;

impl Workable for UiDesigner {
    fn work(&self) -> &'static str {
        "Designer creating beautiful interfaces"
    }
}

impl Eatable for UiDesigner {
    fn eat(&self) -> &'static str {
        "Designer having creative lunch break"
    }
}

impl Sleepable for UiDesigner {
    fn sleep(&self) -> &'static str {
        "Designer resting creative mind"
    }
}

impl UiDesignable for UiDesigner {
    fn design_ui(&self) -> &'static str {
        "Designer crafting intuitive user experiences"
    }

    fn create_wireframes(&self) -> &'static str {
        "Designer sketching interface layouts"
    }
}

impl Worker for UiDesigner {
    fn role(&self) -> &str {
        "UI Designer"
    }

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }

    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        Some(self)
    }

    fn as_ui_designable(&self) -> Option<&dyn UiDesignable> {
        Some(self)
    }
}

pub struct FullStackDeveloper;

impl Workable for FullStackDeveloper {
    fn work(&self) -> &'static str {
        "Full-stack developer handling end-to-end development"
    }
}

impl Eatable for FullStackDeveloper {
    fn eat(&self) -> &'static str {
        "Full-stack developer fueling up for long coding sessions"
    }
}

impl Sleepable for FullStackDeveloper {
    fn sleep(&self) -> &'static str {
        "Full-stack developer recharging after debugging frontend and backend"
    }
}

impl Programmable for FullStackDeveloper {
    fn program(&self) -> &'static str {
        "Full-stack developer writing both frontend and backend code"
    }

    fn debug_code(&self) -> &'static str {
        "Full-stack developer troubleshooting across the entire stack"
    }
}

impl UiDesignable for FullStackDeveloper {
    fn design_ui(&self) -> &'static str {
        "Full-stack developer creating functional user interfaces"
    }

    fn create_wireframes(&self) -> &'static str {
        "Full-stack developer sketching quick UI mockups"
    }
}

impl Testable for FullStackDeveloper {
    fn test_software(&self) -> &'static str {
        "Full-stack developer testing both frontend and backend"
    }

    fn write_test_cases(&self) -> &'static str {
        "Full-stack developer writing integration tests"
    }
}

impl Worker for FullStackDeveloper {
    fn role(&self) -> &str {
        "Full-Stack Developer"
    }

    fn as_eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }

    fn as_sleepable(&self) -> Option<&dyn Sleepable> {
        Some(self)
    }

    fn as_programmable(&self) -> Option<&dyn Programmable> {
        Some(self)
    }

    fn as_ui_designable(&self) -> Option<&dyn UiDesignable> {
        Some(self)
    }

    fn as_testable(&self) -> Option<&dyn Testable> {
        Some(self)
    }
}

/// The default crew shown by the demo.
pub fn crew() -> Vec<Box<dyn Worker>> {
    vec![
        Box::new(Robot),
        Box::new(HumanWorker),
        Box::new(SoftwareDeveloper),
        Box::new(TeamManager),
        Box::new(UiDesigner),
        Box::new(FullStackDeveloper),
    ]
}
