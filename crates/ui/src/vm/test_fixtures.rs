use tracker_core::model::{ProgressMetrics, RepoId, Repository, Stage, StageId, Task, TaskId};

pub fn task(id: &str, completed: bool, enabled: bool, link: Option<&str>) -> Task {
    Task {
        id: TaskId::new(id),
        title: format!("Task {id}"),
        description: None,
        ordering: 0,
        completed,
        enabled,
        link: link.map(str::to_owned),
    }
}

pub fn repo(id: &str, stage_id: &str, completed: u32, total: u32) -> Repository {
    let percent = if total == 0 {
        0.0
    } else {
        f64::from(completed) * 100.0 / f64::from(total)
    };
    Repository {
        id: RepoId::new(id),
        stage_id: StageId::new(stage_id),
        title: format!("Repo {id}"),
        description: None,
        ordering: 0,
        progress: ProgressMetrics::new(completed, total, percent),
        tasks: Vec::new(),
    }
}

pub fn repo_with_tasks(id: &str, stage_id: &str, tasks: Vec<Task>) -> Repository {
    let total = u32::try_from(tasks.len()).unwrap_or(u32::MAX);
    let completed = u32::try_from(tasks.iter().filter(|t| t.completed).count()).unwrap_or(0);
    Repository {
        tasks,
        ..repo(id, stage_id, completed, total)
    }
}

pub fn stage(id: &str, title: &str, repositories: Vec<Repository>) -> Stage {
    let completed = repositories.iter().map(|r| r.progress.completed).sum::<u32>();
    let total = repositories.iter().map(|r| r.progress.total).sum::<u32>();
    let percent = if total == 0 {
        0.0
    } else {
        f64::from(completed) * 100.0 / f64::from(total)
    };
    Stage {
        id: StageId::new(id),
        title: title.to_owned(),
        description: None,
        ordering: 0,
        progress: ProgressMetrics::new(completed, total, percent),
        repositories,
    }
}
