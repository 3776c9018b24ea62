//! 预导入模块，方便使用

pub use super::announcements::{
    ActiveModel as AnnouncementActiveModel, Entity as Announcements, Model as AnnouncementModel,
};
pub use super::categories::{
    ActiveModel as CategoryActiveModel, CategoryCount, Entity as Categories,
    Model as CategoryModel,
};
pub use super::departments::{
    ActiveModel as DepartmentActiveModel, DepartmentCount, Entity as Departments,
    Model as DepartmentModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::reports::{ActiveModel as ReportActiveModel, Entity as Reports, Model as ReportModel};
pub use super::semesters::{
    ActiveModel as SemesterActiveModel, Entity as Semesters, Model as SemesterModel,
};
pub use super::teacher_evaluations::{
    ActiveModel as TeacherEvaluationActiveModel, Entity as TeacherEvaluations,
    Model as TeacherEvaluationModel,
};
pub use super::teachers::{ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel};
pub use super::user_points::{
    ActiveModel as UserPointActiveModel, Entity as UserPoints, Model as UserPointModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
