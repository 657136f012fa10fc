use crate::model::{board::BoardMemberDto, member::MemberDto};

pub fn member_into_dto(model: entity::member::Model) -> MemberDto {
    MemberDto {
        id: model.id,
        full_name: model.full_name,
        email: model.email,
        department_id: model.department_id,
        joined_at: model.joined_at,
    }
}

pub fn board_member_into_dto(model: entity::board_member::Model) -> BoardMemberDto {
    BoardMemberDto {
        id: model.id,
        full_name: model.full_name,
        position: model.position,
    }
}
