//! 预导入模块，方便使用

pub use super::movies::{ActiveModel as MovieActiveModel, Entity as Movies, Model as MovieModel};
pub use super::reviews::{
    ActiveModel as ReviewActiveModel, Entity as Reviews, Model as ReviewModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
