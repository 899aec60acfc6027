// Wire-to-domain conversions. DTO string ids become `EntityId`s and
// the task status string becomes its enum; unknown statuses degrade to
// Active rather than poisoning a whole list response.

use std::str::FromStr;

use tempo_api::types::{
    ClientDto, InvitationDto, MemberDto, OrganizationDto, ProjectDto, ProjectMemberDto,
    ProjectWithTasksDto, TagDto, TaskDto, TimeEntryDto, UserDto,
};
use tracing::warn;

use crate::model::{
    Client, EntityId, Invitation, Member, Organization, Project, ProjectMember, ProjectWithTasks,
    Tag, Task, TaskStatus, TimeEntry, User,
};

impl From<ProjectDto> for Project {
    fn from(dto: ProjectDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            color: dto.color,
            billable: dto.billable,
            billable_rate: dto.billable_rate,
            estimated_time: dto.estimated_time,
            client_id: dto.client_id.map(EntityId::from),
            archived_at: dto.archived_at,
        }
    }
}

impl From<TaskDto> for Task {
    fn from(dto: TaskDto) -> Self {
        let status = TaskStatus::from_str(&dto.status).unwrap_or_else(|_| {
            warn!(status = %dto.status, task = %dto.id, "unknown task status, treating as ACTIVE");
            TaskStatus::Active
        });
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            status,
            spent_time: dto.spent_time,
            estimated_time: dto.estimated_time,
            project_id: EntityId::from(dto.project_id),
        }
    }
}

impl From<TimeEntryDto> for TimeEntry {
    fn from(dto: TimeEntryDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            description: dto.description,
            start: dto.start,
            end: dto.end,
            billable: dto.billable,
            project_id: dto.project_id.map(EntityId::from),
            task_id: dto.task_id.map(EntityId::from),
            client_id: dto.client_id.map(EntityId::from),
            tags: dto.tags.into_iter().map(Tag::from).collect(),
        }
    }
}

impl From<ClientDto> for Client {
    fn from(dto: ClientDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            archived_at: dto.archived_at,
        }
    }
}

impl From<TagDto> for Tag {
    fn from(dto: TagDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
        }
    }
}

impl From<OrganizationDto> for Organization {
    fn from(dto: OrganizationDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
        }
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            email: dto.email,
            current_organization_id: dto.current_organization_id.map(EntityId::from),
        }
    }
}

impl From<MemberDto> for Member {
    fn from(dto: MemberDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            email: dto.email,
            role: dto.role,
            billable_rate: dto.billable_rate,
            is_active: dto.is_active,
        }
    }
}

impl From<InvitationDto> for Invitation {
    fn from(dto: InvitationDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            email: dto.email,
            role: dto.role,
            expires_at: dto.expires_at,
        }
    }
}

impl From<ProjectMemberDto> for ProjectMember {
    fn from(dto: ProjectMemberDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            member_id: EntityId::from(dto.member_id),
            name: dto.name,
            email: dto.email,
            billable_rate: dto.billable_rate,
        }
    }
}

impl From<ProjectWithTasksDto> for ProjectWithTasks {
    fn from(dto: ProjectWithTasksDto) -> Self {
        Self {
            id: EntityId::from(dto.id),
            name: dto.name,
            color: dto.color,
            tasks: dto.tasks.into_iter().map(Task::from).collect(),
        }
    }
}
